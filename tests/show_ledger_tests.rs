//! Show ledger integration tests
//!
//! Pins the time-partition semantics:
//! - a show starting exactly at `now` is upcoming, never past
//! - sub-second components of `now` are dropped before comparison
//! - booking validation distinguishes a missing venue from a missing artist

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use sea_orm::EntityTrait;

use showbill::db::entities::show;
use showbill::db::repositories::{CreateShowInput, ShowRepository};
use showbill::error::AppError;
use showbill::test_utils::*;

fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_show_exactly_at_now_is_upcoming_for_both_roles() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    let artist = create_test_artist(&db, "Guns N Petals", "San Francisco", "CA", &[]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now).await;

    let ledger = ShowRepository::new(db.clone());

    assert_eq!(ledger.upcoming_for_venue(venue.id, now).await.unwrap().len(), 1);
    assert_eq!(ledger.past_for_venue(venue.id, now).await.unwrap().len(), 0);
    assert_eq!(ledger.upcoming_for_artist(artist.id, now).await.unwrap().len(), 1);
    assert_eq!(ledger.past_for_artist(artist.id, now).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_partition_splits_past_and_upcoming() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    let artist = create_test_artist(&db, "Matt Quevado", "New York", "NY", &[]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now - Duration::hours(1)).await;
    create_test_show(&db, venue.id, artist.id, now + Duration::hours(1)).await;
    create_test_show(&db, venue.id, artist.id, now + Duration::days(2)).await;

    let ledger = ShowRepository::new(db.clone());

    let upcoming = ledger.upcoming_for_venue(venue.id, now).await.unwrap();
    let past = ledger.past_for_venue(venue.id, now).await.unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(past.len(), 1);

    // Venue-side summaries carry the artist as counterpart
    assert_eq!(past[0].counterpart_id, artist.id);
    assert_eq!(past[0].counterpart_name, "Matt Quevado");
    assert!(past[0].counterpart_image_link.is_some());
    assert_eq!(past[0].start_time, now - Duration::hours(1));

    // Artist side sees the venue
    let artist_upcoming = ledger.upcoming_for_artist(artist.id, now).await.unwrap();
    assert_eq!(artist_upcoming.len(), 2);
    assert!(artist_upcoming
        .iter()
        .all(|s| s.counterpart_name == "The Musical Hop"));
}

#[tokio::test]
async fn test_subsecond_now_is_truncated_before_comparison() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Venue", "Austin", "TX", &[]).await;
    let artist = create_test_artist(&db, "Artist", "Austin", "TX", &[]).await;

    let now = instant();
    create_test_show(&db, venue.id, artist.id, now).await;

    // Half a second past the boundary still classifies as upcoming once the
    // sub-second part is dropped
    let fuzzy_now = now.with_nanosecond(500_000_000).unwrap();
    let ledger = ShowRepository::new(db.clone());

    assert_eq!(ledger.upcoming_for_venue(venue.id, fuzzy_now).await.unwrap().len(), 1);
    assert_eq!(ledger.past_for_venue(venue.id, fuzzy_now).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_show_rejects_missing_venue() {
    let db = setup_test_db().await;
    let artist = create_test_artist(&db, "Artist", "Austin", "TX", &[]).await;

    let result = ShowRepository::new(db.clone())
        .create(CreateShowInput {
            venue_id: 9999,
            artist_id: artist.id,
            start_time: instant(),
        })
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Venue id is not listed."),
        other => panic!("expected a venue validation error, got {other:?}"),
    }
    assert_eq!(show::Entity::find().all(&db).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_show_rejects_missing_artist() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Venue", "Austin", "TX", &[]).await;

    let result = ShowRepository::new(db.clone())
        .create(CreateShowInput {
            venue_id: venue.id,
            artist_id: 9999,
            start_time: instant(),
        })
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Artist id is not listed."),
        other => panic!("expected an artist validation error, got {other:?}"),
    }
    assert_eq!(show::Entity::find().all(&db).await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_show_persists_at_second_precision() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Venue", "Austin", "TX", &[]).await;
    let artist = create_test_artist(&db, "Artist", "Austin", "TX", &[]).await;

    let ragged = instant().with_nanosecond(123_456_789).unwrap();
    let created = ShowRepository::new(db.clone())
        .create(CreateShowInput {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: ragged,
        })
        .await
        .unwrap();

    assert_eq!(created.start_time, instant());
    assert_eq!(created.venue_id, venue.id);
    assert_eq!(created.artist_id, artist.id);
}

#[tokio::test]
async fn test_list_all_denormalizes_display_fields() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA", &[]).await;
    let artist = create_test_artist(&db, "The Wild Sax Band", "New York", "NY", &[]).await;

    create_test_show(&db, venue.id, artist.id, instant()).await;
    create_test_show(&db, venue.id, artist.id, instant() + Duration::days(1)).await;

    let listings = ShowRepository::new(db.clone()).list_all().await.unwrap();

    assert_eq!(listings.len(), 2);
    for listing in &listings {
        assert_eq!(listing.venue_id, venue.id);
        assert_eq!(listing.venue_name, "The Musical Hop");
        assert_eq!(listing.artist_id, artist.id);
        assert_eq!(listing.artist_name, "The Wild Sax Band");
        assert!(listing.artist_image_link.is_some());
    }
}
