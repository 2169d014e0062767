use axum::{extract::Query, response::Html};
use serde::Deserialize;

use crate::templates::home_page;

#[derive(Deserialize)]
pub struct HomeQuery {
    pub flash: Option<String>,
}

pub async fn index(Query(query): Query<HomeQuery>) -> Html<String> {
    Html(home_page(query.flash.as_deref()).into_string())
}
