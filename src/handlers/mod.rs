pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::state::AppState;

/// Shared shape of the search form posted by the venue and artist pages.
#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::new_form).post(venues::create))
        .route("/venues/:id", get(venues::detail).delete(venues::delete))
        .route("/venues/:id/edit", get(venues::edit_form).post(venues::edit))
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::new_form).post(artists::create))
        .route("/artists/:id", get(artists::detail))
        .route("/artists/:id/edit", get(artists::edit_form).post(artists::edit))
        // Shows
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::new_form).post(shows::create))
}

/// Redirect home carrying a flash notice in the query string. There is no
/// session layer; the home page renders whatever arrives here.
pub(crate) fn flash_redirect(message: &str) -> Redirect {
    Redirect::to(&format!("/?flash={}", urlencoding::encode(message)))
}

/// Form fields arrive as empty strings when left blank.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
