use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::repositories::{now_to_second, CreateVenueInput, UpdateVenueInput, VenueRepository},
    error::{AppError, Result},
    services,
    state::AppState,
    templates,
    templates::VenueFormValues,
};

use super::{blank_to_none, flash_redirect, SearchForm};

/// Raw venue form submission. `genres` carries the repeated multi-select
/// values, which is why these handlers use `axum_extra`'s Form extractor.
#[derive(Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let groups = services::venues_by_city(&state.db, now_to_second()).await?;
    Ok(Html(templates::venues_page(&groups).into_string()))
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = VenueRepository::new(state.db.clone())
        .search(&form.search_term)
        .await?;
    Ok(Html(
        templates::venue_search_page(&form.search_term, &results).into_string(),
    ))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>> {
    let view = services::venue_detail(&state.db, id, now_to_second()).await?;
    Ok(Html(templates::venue_detail_page(&view).into_string()))
}

pub async fn new_form() -> Html<String> {
    Html(templates::new_venue_page().into_string())
}

pub async fn create(State(state): State<AppState>, Form(form): Form<VenueForm>) -> Redirect {
    let name = form.name.clone();
    let input = CreateVenueInput {
        name: form.name,
        city: form.city,
        state: form.state,
        address: blank_to_none(form.address),
        phone: blank_to_none(form.phone),
        website: blank_to_none(form.website),
        image_link: blank_to_none(form.image_link),
        facebook_link: blank_to_none(form.facebook_link),
        seeking_talent: form.seeking_talent,
        seeking_description: blank_to_none(form.seeking_description),
        genres: form.genres,
    };

    match VenueRepository::new(state.db.clone()).create(input).await {
        Ok(venue) => {
            tracing::info!("Listed venue {} ({})", venue.name, venue.id);
            flash_redirect(&format!("Venue {name} was successfully listed!"))
        }
        Err(e) => {
            tracing::error!("Failed to list venue {}: {}", name, e);
            flash_redirect(&format!(
                "An error occurred. Venue {name} could not be listed."
            ))
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match VenueRepository::new(state.db.clone()).delete(id).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(AppError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(json!({ "success": false }))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete venue {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false })),
            )
                .into_response()
        }
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>> {
    let view = services::venue_detail(&state.db, id, now_to_second()).await?;
    let values = VenueFormValues {
        name: view.name,
        city: view.city,
        state: view.state,
        address: view.address.unwrap_or_default(),
        phone: view.phone.unwrap_or_default(),
        website: view.website.unwrap_or_default(),
        image_link: view.image_link.unwrap_or_default(),
        facebook_link: view.facebook_link.unwrap_or_default(),
        seeking_talent: view.seeking_talent,
        seeking_description: view.seeking_description.unwrap_or_default(),
        genres: view.genres,
    };
    Ok(Html(templates::edit_venue_page(id, &values).into_string()))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Redirect> {
    let input = UpdateVenueInput {
        name: form.name,
        city: form.city,
        state: form.state,
        address: blank_to_none(form.address),
        phone: blank_to_none(form.phone),
        facebook_link: blank_to_none(form.facebook_link),
        genres: form.genres,
    };

    VenueRepository::new(state.db.clone()).update(id, input).await?;
    Ok(Redirect::to(&format!("/venues/{id}")))
}
