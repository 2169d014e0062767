use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    db::repositories::{now_to_second, ArtistRepository, CreateArtistInput, UpdateArtistInput},
    error::Result,
    services,
    state::AppState,
    templates,
    templates::ArtistFormValues,
};

use super::{blank_to_none, flash_redirect, SearchForm};

#[derive(Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let items = services::list_artists(&state.db).await?;
    Ok(Html(templates::artists_page(&items).into_string()))
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = ArtistRepository::new(state.db.clone())
        .search(&form.search_term)
        .await?;
    Ok(Html(
        templates::artist_search_page(&form.search_term, &results).into_string(),
    ))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>> {
    let view = services::artist_detail(&state.db, id, now_to_second()).await?;
    Ok(Html(templates::artist_detail_page(&view).into_string()))
}

pub async fn new_form() -> Html<String> {
    Html(templates::new_artist_page().into_string())
}

pub async fn create(State(state): State<AppState>, Form(form): Form<ArtistForm>) -> Redirect {
    let name = form.name.clone();
    let input = CreateArtistInput {
        name: form.name,
        city: form.city,
        state: form.state,
        phone: blank_to_none(form.phone),
        website: blank_to_none(form.website),
        image_link: blank_to_none(form.image_link),
        facebook_link: blank_to_none(form.facebook_link),
        seeking_venue: form.seeking_venue,
        seeking_description: blank_to_none(form.seeking_description),
        genres: form.genres,
    };

    match ArtistRepository::new(state.db.clone()).create(input).await {
        Ok(artist) => {
            tracing::info!("Listed artist {} ({})", artist.name, artist.id);
            flash_redirect(&format!("Artist {name} was successfully listed!"))
        }
        Err(e) => {
            tracing::error!("Failed to list artist {}: {}", name, e);
            flash_redirect(&format!(
                "An error occurred. Artist {name} could not be listed."
            ))
        }
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>> {
    let view = services::artist_detail(&state.db, id, now_to_second()).await?;
    let values = ArtistFormValues {
        name: view.name,
        city: view.city,
        state: view.state,
        phone: view.phone.unwrap_or_default(),
        website: view.website.unwrap_or_default(),
        image_link: view.image_link.unwrap_or_default(),
        facebook_link: view.facebook_link.unwrap_or_default(),
        seeking_venue: view.seeking_venue,
        seeking_description: view.seeking_description.unwrap_or_default(),
        genres: view.genres,
    };
    Ok(Html(templates::edit_artist_page(id, &values).into_string()))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Redirect> {
    let input = UpdateArtistInput {
        name: form.name,
        city: form.city,
        state: form.state,
        phone: blank_to_none(form.phone),
        facebook_link: blank_to_none(form.facebook_link),
        genres: form.genres,
    };

    ArtistRepository::new(state.db.clone()).update(id, input).await?;
    Ok(Redirect::to(&format!("/artists/{id}")))
}
