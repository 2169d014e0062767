//! Demo-data seeding for the `bootstrap` command.
//!
//! Everything goes through the repositories, so the seed exercises the same
//! get-or-create and booking paths as the live forms.

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::db::repositories::{
    now_to_second, ArtistRepository, CreateArtistInput, CreateShowInput, CreateVenueInput,
    ShowRepository, VenueRepository,
};
use crate::error::Result;

const VENUE_IMAGE: &str =
    "https://images.unsplash.com/photo-1543900694-133f37abaaa5?auto=format&fit=crop&w=400&q=60";
const ARTIST_IMAGE: &str =
    "https://images.unsplash.com/photo-1549213783-8284d0336c4f?auto=format&fit=crop&w=300&q=80";

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    let venues = VenueRepository::new(db.clone());
    let artists = ArtistRepository::new(db.clone());
    let shows = ShowRepository::new(db.clone());

    let hop = venues
        .create(demo_venue(
            "The Musical Hop",
            "San Francisco",
            "CA",
            &["Jazz", "R&B"],
        ))
        .await?;
    let pianos = venues
        .create(demo_venue(
            "The Dueling Pianos Bar",
            "San Francisco",
            "CA",
            &["Pop", "Jazz", "Country"],
        ))
        .await?;
    let dueling = venues
        .create(demo_venue(
            "The Dueling",
            "New York",
            "NY",
            &["Country", "Jazz"],
        ))
        .await?;
    let park_square = venues
        .create(demo_venue(
            "Park Square Live Music & Coffee",
            "San Francisco",
            "CA",
            &["Country", "Jazz", "Pop"],
        ))
        .await?;

    let guns = artists
        .create(demo_artist("Guns N Petals", "San Francisco", "CA", &["Country", "Jazz"]))
        .await?;
    let quevado = artists
        .create(demo_artist("Matt Quevado", "New York", "NY", &["Jazz", "R&B", "Country"]))
        .await?;
    let sax_band = artists
        .create(demo_artist("The Wild Sax Band", "New York", "NY", &["Pop", "Jazz"]))
        .await?;

    let now = now_to_second();
    let bookings = [
        (hop.id, quevado.id, 1),
        (dueling.id, guns.id, 2),
        (hop.id, sax_band.id, -1),
        (pianos.id, sax_band.id, 3),
        (pianos.id, sax_band.id, -3),
        (dueling.id, guns.id, 1),
        (park_square.id, sax_band.id, 4),
    ];
    for (venue_id, artist_id, days) in bookings {
        shows
            .create(CreateShowInput {
                venue_id,
                artist_id,
                start_time: now + Duration::days(days),
            })
            .await?;
    }

    Ok(())
}

fn demo_venue(name: &str, city: &str, state: &str, genres: &[&str]) -> CreateVenueInput {
    CreateVenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        website: Some("https://www.themusicalhop.com".to_string()),
        image_link: Some(VENUE_IMAGE.to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        seeking_talent: true,
        seeking_description: Some(
            "We are on the lookout for a local artist to play every two weeks. Please call us."
                .to_string(),
        ),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn demo_artist(name: &str, city: &str, state: &str, genres: &[&str]) -> CreateArtistInput {
    CreateArtistInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: Some("01010101010".to_string()),
        website: Some("https://www.gunsnpetalsband.com".to_string()),
        image_link: Some(ARTIST_IMAGE.to_string()),
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
        seeking_venue: true,
        seeking_description: Some(
            "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
        ),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}
