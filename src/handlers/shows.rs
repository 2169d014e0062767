use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::Form;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{
    db::repositories::{CreateShowInput, ShowRepository},
    error::{AppError, Result},
    state::AppState,
    templates,
};

use super::flash_redirect;

/// Ids arrive as free text; an unparsable id is treated the same as an
/// unlisted one.
#[derive(Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub start_time: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let listings = ShowRepository::new(state.db.clone()).list_all().await?;
    Ok(Html(templates::shows_page(&listings).into_string()))
}

pub async fn new_form() -> Html<String> {
    Html(templates::new_show_page().into_string())
}

pub async fn create(State(state): State<AppState>, Form(form): Form<ShowForm>) -> Redirect {
    let result = book_show(&state, &form).await;

    match result {
        Ok(_) => flash_redirect("Show was successfully listed!"),
        Err(AppError::Validation(msg)) => flash_redirect(&msg),
        Err(e) => {
            tracing::error!("Failed to book show: {}", e);
            flash_redirect("An error occurred. Show could not be listed.")
        }
    }
}

async fn book_show(state: &AppState, form: &ShowForm) -> Result<()> {
    let venue_id = parse_id(&form.venue_id)
        .ok_or_else(|| AppError::Validation("Venue id is not listed.".to_string()))?;
    let artist_id = parse_id(&form.artist_id)
        .ok_or_else(|| AppError::Validation("Artist id is not listed.".to_string()))?;
    let start_time = parse_start_time(&form.start_time)?;

    ShowRepository::new(state.db.clone())
        .create(CreateShowInput {
            venue_id,
            artist_id,
            start_time,
        })
        .await?;
    Ok(())
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Accepts the browser's datetime-local format plus the plain
/// "YYYY-MM-DD HH:MM:SS" form the listing pages display.
fn parse_start_time(raw: &str) -> Result<NaiveDateTime> {
    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

    let raw = raw.trim();
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed);
        }
    }
    Err(AppError::Validation(
        "Start time is not a valid timestamp.".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datetime_local_input() {
        let parsed = parse_start_time("2025-06-15T20:30").unwrap();
        assert_eq!(parsed.to_string(), "2025-06-15 20:30:00");
    }

    #[test]
    fn parses_second_precision_forms() {
        assert!(parse_start_time("2025-06-15T20:30:45").is_ok());
        assert!(parse_start_time("2025-06-15 20:30:45").is_ok());
    }

    #[test]
    fn rejects_garbage_start_time() {
        assert!(parse_start_time("next friday").is_err());
        assert!(parse_start_time("").is_err());
    }

    #[test]
    fn id_parsing_tolerates_whitespace_only() {
        assert_eq!(parse_id(" 42 "), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
