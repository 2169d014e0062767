//! Test utilities for Showbill
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data factories

use chrono::{NaiveDateTime, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artist, show, venue},
    db::repositories::{
        ArtistRepository, CreateArtistInput, CreateVenueInput, VenueRepository,
    },
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue through the repository, resolving its city/state and
/// genres along the way
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
    genres: &[&str],
) -> venue::Model {
    VenueRepository::new(db.clone())
        .create(CreateVenueInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: Some("1015 Folsom Street".to_string()),
            phone: Some("123-123-1234".to_string()),
            website: None,
            image_link: Some("https://example.com/venue.jpg".to_string()),
            facebook_link: None,
            seeking_talent: false,
            seeking_description: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        })
        .await
        .expect("Failed to create test venue")
}

/// Create a test artist through the repository
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
    genres: &[&str],
) -> artist::Model {
    ArtistRepository::new(db.clone())
        .create(CreateArtistInput {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            phone: Some("01010101010".to_string()),
            website: None,
            image_link: Some("https://example.com/artist.jpg".to_string()),
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        })
        .await
        .expect("Failed to create test artist")
}

/// Insert a show row directly, bypassing booking validation, so tests can
/// place start times wherever they need them
pub async fn create_test_show(
    db: &DatabaseConnection,
    venue_id: i32,
    artist_id: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    show::ActiveModel {
        start_time: Set(start_time),
        venue_id: Set(venue_id),
        artist_id: Set(artist_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert test show")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;

    use crate::db::entities::{city, genre, state as state_entity};

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        let venues = venue::Entity::find().all(&db).await.unwrap();
        assert_eq!(venues.len(), 0);
    }

    #[tokio::test]
    async fn test_create_test_venue() {
        let db = setup_test_db().await;
        let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &["Jazz"]).await;

        assert_eq!(venue.name, "The Musical Hop");
        assert!(venue.id > 0);

        // The factory resolves the reference rows too
        assert_eq!(state_entity::Entity::find().all(&db).await.unwrap().len(), 1);
        assert_eq!(city::Entity::find().all(&db).await.unwrap().len(), 1);
        assert_eq!(genre::Entity::find().all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_test_show() {
        let db = setup_test_db().await;
        let venue = create_test_venue(&db, "Venue", "Austin", "TX", &[]).await;
        let artist = create_test_artist(&db, "Artist", "Austin", "TX", &[]).await;

        let start = chrono::NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let show = create_test_show(&db, venue.id, artist.id, start).await;

        assert_eq!(show.venue_id, venue.id);
        assert_eq!(show.artist_id, artist.id);
        assert_eq!(show.start_time, start);
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let venue1 = create_test_venue(&db1, "Venue 1", "Austin", "TX", &[]).await;
        let venue2 = create_test_venue(&db2, "Venue 2", "Austin", "TX", &[]).await;

        // Both should be ID 1 (separate databases)
        assert_eq!(venue1.id, 1);
        assert_eq!(venue2.id, 1);

        let db1_venues = venue::Entity::find().all(&db1).await.unwrap();
        let db2_venues = venue::Entity::find().all(&db2).await.unwrap();

        assert_eq!(db1_venues.len(), 1);
        assert_eq!(db2_venues.len(), 1);
        assert_eq!(db1_venues[0].name, "Venue 1");
        assert_eq!(db2_venues[0].name, "Venue 2");
    }
}
