//! Read-only view assembly for the directory pages.
//!
//! Everything here re-queries the store and returns plain view structs;
//! templates never see persisted entities directly.

use anyhow::anyhow;
use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};

use crate::db::entities::{artist, city, genre, state, venue};
use crate::db::repositories::{ShowRepository, ShowSummary};
use crate::error::{AppError, Result};

pub struct VenueListItem {
    pub id: i32,
    pub name: String,
    pub upcoming_shows_count: usize,
}

/// One group per City row. Two cities sharing a name but not an id stay
/// separate groups.
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListItem>,
}

pub struct VenueDetailView {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub city: String,
    pub state: String,
    pub genres: Vec<String>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
}

pub struct ArtistDetailView {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub city: String,
    pub state: String,
    pub genres: Vec<String>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
}

pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

/// Venues grouped by city, each annotated with its upcoming-show count.
pub async fn venues_by_city(db: &DatabaseConnection, now: NaiveDateTime) -> Result<Vec<CityGroup>> {
    let shows = ShowRepository::new(db.clone());
    let mut groups = Vec::new();

    for (city, state) in city::Entity::find()
        .find_also_related(state::Entity)
        .all(db)
        .await?
    {
        let state = state.ok_or_else(|| {
            AppError::Other(anyhow!("city {} references a missing state", city.id))
        })?;

        let venues = venue::Entity::find()
            .filter(venue::Column::CityId.eq(city.id))
            .all(db)
            .await?;

        let mut items = Vec::with_capacity(venues.len());
        for v in venues {
            let upcoming = shows.upcoming_for_venue(v.id, now).await?;
            items.push(VenueListItem {
                id: v.id,
                name: v.name,
                upcoming_shows_count: upcoming.len(),
            });
        }

        groups.push(CityGroup {
            city: city.name,
            state: state.name,
            venues: items,
        });
    }

    Ok(groups)
}

pub async fn venue_detail(
    db: &DatabaseConnection,
    id: i32,
    now: NaiveDateTime,
) -> Result<VenueDetailView> {
    let venue = venue::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {id}")))?;

    let (city, state) = resolve_location(db, venue.city_id).await?;
    let genres = venue
        .find_related(genre::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();

    let shows = ShowRepository::new(db.clone());
    let upcoming_shows = shows.upcoming_for_venue(id, now).await?;
    let past_shows = shows.past_for_venue(id, now).await?;

    Ok(VenueDetailView {
        id: venue.id,
        name: venue.name,
        address: venue.address,
        phone: venue.phone,
        website: venue.website,
        image_link: venue.image_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        city,
        state,
        genres,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    })
}

pub async fn artist_detail(
    db: &DatabaseConnection,
    id: i32,
    now: NaiveDateTime,
) -> Result<ArtistDetailView> {
    let artist = artist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {id}")))?;

    let (city, state) = resolve_location(db, artist.city_id).await?;
    let genres = artist
        .find_related(genre::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();

    let shows = ShowRepository::new(db.clone());
    let upcoming_shows = shows.upcoming_for_artist(id, now).await?;
    let past_shows = shows.past_for_artist(id, now).await?;

    Ok(ArtistDetailView {
        id: artist.id,
        name: artist.name,
        phone: artist.phone,
        website: artist.website,
        image_link: artist.image_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        city,
        state,
        genres,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
        past_shows_count: past_shows.len(),
        past_shows,
    })
}

pub async fn list_artists(db: &DatabaseConnection) -> Result<Vec<ArtistListItem>> {
    Ok(artist::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|a| ArtistListItem {
            id: a.id,
            name: a.name,
        })
        .collect())
}

/// City and state names for a listing. A dangling city reference is an
/// internal inconsistency, not a user-facing 404.
async fn resolve_location(db: &DatabaseConnection, city_id: i32) -> Result<(String, String)> {
    let city = city::Entity::find_by_id(city_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Other(anyhow!("missing city row {city_id}")))?;
    let state = state::Entity::find_by_id(city.state_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Other(anyhow!("missing state row {}", city.state_id)))?;
    Ok((city.name, state.name))
}
