use chrono::{Local, NaiveDateTime, Timelike, Utc};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

pub struct CreateShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}

/// One side of a show as seen from the other party's page: a venue's show
/// summary carries the artist, an artist's carries the venue.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowSummary {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Denormalized row for the full show listing.
#[derive(Debug, FromQueryResult)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// The wall clock, dropped to whole-second precision so comparisons line up
/// with the persisted start times.
pub fn now_to_second() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn to_second(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(0).unwrap_or(t)
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Book a show. Both parties must already be listed; the two lookup
    /// failures are distinct, user-visible errors.
    pub async fn create(&self, input: CreateShowInput) -> Result<show::Model> {
        let txn = self.db.begin().await?;

        venue::Entity::find_by_id(input.venue_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::Validation("Venue id is not listed.".to_string()))?;
        artist::Entity::find_by_id(input.artist_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::Validation("Artist id is not listed.".to_string()))?;

        let created = show::ActiveModel {
            start_time: Set(to_second(input.start_time)),
            venue_id: Set(input.venue_id),
            artist_id: Set(input.artist_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Shows at this venue starting at or after `now`. A show starting at
    /// exactly `now` is upcoming, never past.
    pub async fn upcoming_for_venue(
        &self,
        venue_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<ShowSummary>> {
        self.venue_shows(venue_id, show::Column::StartTime.gte(to_second(now)))
            .await
    }

    /// Shows at this venue that started strictly before `now`.
    pub async fn past_for_venue(
        &self,
        venue_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<ShowSummary>> {
        self.venue_shows(venue_id, show::Column::StartTime.lt(to_second(now)))
            .await
    }

    pub async fn upcoming_for_artist(
        &self,
        artist_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<ShowSummary>> {
        self.artist_shows(artist_id, show::Column::StartTime.gte(to_second(now)))
            .await
    }

    pub async fn past_for_artist(
        &self,
        artist_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<ShowSummary>> {
        self.artist_shows(artist_id, show::Column::StartTime.lt(to_second(now)))
            .await
    }

    /// Every show with the display fields the listing page needs, in one
    /// joined query.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>> {
        let listings = show::Entity::find()
            .select_only()
            .column(show::Column::VenueId)
            .column_as(venue::Column::Name, "venue_name")
            .column(show::Column::ArtistId)
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .column(show::Column::StartTime)
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?;
        Ok(listings)
    }

    async fn venue_shows(
        &self,
        venue_id: i32,
        time_filter: SimpleExpr,
    ) -> Result<Vec<ShowSummary>> {
        let rows = show::Entity::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .filter(time_filter)
            .find_also_related(artist::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(s, counterpart)| {
                counterpart.map(|a| ShowSummary {
                    counterpart_id: a.id,
                    counterpart_name: a.name,
                    counterpart_image_link: a.image_link,
                    start_time: s.start_time,
                })
            })
            .collect())
    }

    async fn artist_shows(
        &self,
        artist_id: i32,
        time_filter: SimpleExpr,
    ) -> Result<Vec<ShowSummary>> {
        let rows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .filter(time_filter)
            .find_also_related(venue::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(s, counterpart)| {
                counterpart.map(|v| ShowSummary {
                    counterpart_id: v.id,
                    counterpart_name: v.name,
                    counterpart_image_link: v.image_link,
                    start_time: s.start_time,
                })
            })
            .collect())
    }
}
