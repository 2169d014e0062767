//! Directory query layer tests
//!
//! - city grouping is by row identity, not name string
//! - detail views assemble location, genres, and both show partitions
//! - name search is a case-insensitive substring match with a count

use chrono::{Duration, NaiveDate, NaiveDateTime};

use showbill::db::repositories::{ArtistRepository, VenueRepository};
use showbill::error::AppError;
use showbill::services;
use showbill::test_utils::*;

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_venues_by_city_groups_by_row_identity() {
    let db = setup_test_db().await;

    create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    create_test_venue(&db, "The Dueling Pianos Bar", "San Francisco", "CA", &[]).await;
    // Same city name, different states: must stay separate groups
    create_test_venue(&db, "Veterans Hall", "Springfield", "IL", &[]).await;
    create_test_venue(&db, "The Armory", "Springfield", "MO", &[]).await;

    let groups = services::venues_by_city(&db, instant()).await.unwrap();

    assert_eq!(groups.len(), 3);

    let sf = groups
        .iter()
        .find(|g| g.city == "San Francisco")
        .expect("San Francisco group");
    assert_eq!(sf.state, "CA");
    assert_eq!(sf.venues.len(), 2);

    let springfields: Vec<_> = groups.iter().filter(|g| g.city == "Springfield").collect();
    assert_eq!(springfields.len(), 2);
    assert_ne!(springfields[0].state, springfields[1].state);
    assert!(springfields.iter().all(|g| g.venues.len() == 1));
}

#[tokio::test]
async fn test_venues_by_city_counts_upcoming_shows() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    let artist = create_test_artist(&db, "Guns N Petals", "San Francisco", "CA", &[]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now + Duration::days(1)).await;
    create_test_show(&db, venue.id, artist.id, now + Duration::days(2)).await;
    create_test_show(&db, venue.id, artist.id, now - Duration::days(1)).await;

    let groups = services::venues_by_city(&db, now).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].venues[0].upcoming_shows_count, 2);
}

#[tokio::test]
async fn test_venue_detail_assembles_view() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &["Jazz", "R&B"]).await;
    let artist = create_test_artist(&db, "Matt Quevado", "New York", "NY", &[]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now + Duration::days(1)).await;
    create_test_show(&db, venue.id, artist.id, now - Duration::days(1)).await;

    let view = services::venue_detail(&db, venue.id, now).await.unwrap();

    assert_eq!(view.id, venue.id);
    assert_eq!(view.name, "The Musical Hop");
    assert_eq!(view.city, "San Francisco");
    assert_eq!(view.state, "CA");
    assert_eq!(view.genres.len(), 2);
    assert!(view.genres.contains(&"Jazz".to_string()));
    assert!(view.genres.contains(&"R&B".to_string()));
    assert_eq!(view.upcoming_shows_count, 1);
    assert_eq!(view.past_shows_count, 1);
    assert_eq!(view.upcoming_shows[0].counterpart_name, "Matt Quevado");
}

#[tokio::test]
async fn test_venue_detail_missing_is_not_found() {
    let db = setup_test_db().await;

    let result = services::venue_detail(&db, 9999, instant()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_artist_detail_assembles_view() {
    let db = setup_test_db().await;

    let venue = create_test_venue(&db, "The Dueling", "New York", "NY", &[]).await;
    let artist = create_test_artist(&db, "The Wild Sax Band", "New York", "NY", &["Pop"]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now + Duration::days(3)).await;

    let view = services::artist_detail(&db, artist.id, now).await.unwrap();

    assert_eq!(view.name, "The Wild Sax Band");
    assert_eq!(view.city, "New York");
    assert_eq!(view.state, "NY");
    assert_eq!(view.genres, vec!["Pop".to_string()]);
    assert_eq!(view.upcoming_shows_count, 1);
    assert_eq!(view.past_shows_count, 0);
    assert_eq!(view.upcoming_shows[0].counterpart_name, "The Dueling");
}

#[tokio::test]
async fn test_artist_detail_missing_is_not_found() {
    let db = setup_test_db().await;

    let result = services::artist_detail(&db, 123, instant()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_list_artists() {
    let db = setup_test_db().await;

    create_test_artist(&db, "Guns N Petals", "San Francisco", "CA", &[]).await;
    create_test_artist(&db, "Matt Quevado", "New York", "NY", &[]).await;

    let items = services::list_artists(&db).await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_search_venues_substring_case_insensitive() {
    let db = setup_test_db().await;

    create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    create_test_venue(&db, "The Dueling Pianos Bar", "San Francisco", "CA", &[]).await;

    let repo = VenueRepository::new(db.clone());

    let results = repo.search("hop").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.items.len(), 1);
    assert_eq!(results.items[0].name, "The Musical Hop");

    // Case-insensitive
    let shouting = repo.search("HOP").await.unwrap();
    assert_eq!(shouting.count, 1);
    assert_eq!(shouting.items[0].name, "The Musical Hop");

    let misses = repo.search("zither").await.unwrap();
    assert_eq!(misses.count, 0);
    assert!(misses.items.is_empty());
}

#[tokio::test]
async fn test_search_artists_substring_case_insensitive() {
    let db = setup_test_db().await;

    create_test_artist(&db, "Guns N Petals", "San Francisco", "CA", &[]).await;
    create_test_artist(&db, "The Wild Sax Band", "New York", "NY", &[]).await;

    let repo = ArtistRepository::new(db.clone());

    let results = repo.search("sax").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.items[0].name, "The Wild Sax Band");

    // Empty term matches everything
    let all = repo.search("").await.unwrap();
    assert_eq!(all.count, 2);
}
