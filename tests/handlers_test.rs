//! Integration tests for the HTTP surface
//!
//! Drives the axum router end to end against an in-memory database:
//! - page rendering and 404s
//! - form submissions for venues, artists, and shows
//! - the DELETE venue contract ({success: bool})

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use showbill::db::entities::{artist, venue};
use showbill::handlers;
use showbill::state::AppState;
use showbill::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::html_routes())
        .with_state(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_home_page_renders() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Showbill"));
}

#[tokio::test]
async fn test_home_page_renders_flash_notice() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?flash=Venue%20Test%20was%20successfully%20listed!")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Venue Test was successfully listed!"));
}

#[tokio::test]
async fn test_venues_page_lists_groups() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA", &[]).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(Request::builder().uri("/venues").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("San Francisco"));
}

#[tokio::test]
async fn test_venue_detail_renders() {
    let state = setup_test_app_state().await;
    let created = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA", &["Jazz"]).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Jazz"));
}

#[tokio::test]
async fn test_venue_detail_missing_is_404() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_venue_form_renders() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("List a Venue"));
}

#[tokio::test]
async fn test_create_venue_submission_persists_and_redirects() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/venues/create",
            "name=The+Spot&city=Austin&state=TX&address=600+Congress+Ave&phone=555-0100&genres=Jazz&genres=Folk",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("/?flash="));
    assert!(location.contains("successfully%20listed"));

    let venues = venue::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].name, "The Spot");
}

#[tokio::test]
async fn test_edit_venue_submission_updates_and_redirects() {
    let state = setup_test_app_state().await;
    let created = create_test_venue(&state.db, "Old Name", "Austin", "TX", &[]).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post(
            &format!("/venues/{}/edit", created.id),
            "name=New+Name&city=Austin&state=TX&genres=Jazz",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, format!("/venues/{}", created.id));

    let reloaded = venue::Entity::find_by_id(created.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.name, "New Name");
}

#[tokio::test]
async fn test_delete_venue_returns_success_json() {
    let state = setup_test_app_state().await;
    let created = create_test_venue(&state.db, "Doomed", "Austin", "TX", &[]).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], true);

    assert!(venue::Entity::find_by_id(created.id)
        .one(&state.db)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_missing_venue_is_404_with_flag() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_search_venues_endpoint() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "San Francisco", "CA", &[]).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post("/venues/search", "search_term=hop"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("The Dueling Pianos Bar"));
    assert!(body.contains("1 results"));
}

#[tokio::test]
async fn test_artists_pages_and_creation() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(form_post(
            "/artists/create",
            "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let artists = artist::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Guns N Petals");

    let response = app
        .oneshot(Request::builder().uri("/artists").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_create_show_flashes_specific_validation_message() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Artist", "Austin", "TX", &[]).await;

    let app = create_test_router(&state);

    // Missing venue flags the venue, not the artist
    let response = app
        .clone()
        .oneshot(form_post(
            "/shows/create",
            &format!("venue_id=9999&artist_id={}&start_time=2025-06-15T20:00", artist.id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("Venue%20id%20is%20not%20listed."));

    // Missing artist flags the artist
    let venue = create_test_venue(&state.db, "Venue", "Austin", "TX", &[]).await;
    let response = app
        .oneshot(form_post(
            "/shows/create",
            &format!("venue_id={}&artist_id=9999&start_time=2025-06-15T20:00", venue.id),
        ))
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("Artist%20id%20is%20not%20listed."));
}

#[tokio::test]
async fn test_create_show_and_listing_page() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    let artist = create_test_artist(&state.db, "Matt Quevado", "New York", "NY", &[]).await;

    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(form_post(
            "/shows/create",
            &format!(
                "venue_id={}&artist_id={}&start_time=2025-06-15T20:00",
                venue.id, artist.id
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.contains("successfully%20listed"));

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Matt Quevado"));
    assert!(body.contains("2025-06-15 20:00:00"));
}
