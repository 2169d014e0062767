use std::collections::HashSet;

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::db::entities::{genre, show, venue, venue_genre};
use crate::db::lookups;
use crate::error::{AppError, Result};

use super::SearchResult;

pub struct CreateVenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

/// Fields an edit submission may change. Website, image link, and the
/// seeking flags are set at creation and left alone by edits.
pub struct UpdateVenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a venue together with any reference rows it needs.
    ///
    /// State, city, genres, the venue itself, and its genre links are all
    /// written in one transaction; if anything fails, none of them persist.
    pub async fn create(&self, input: CreateVenueInput) -> Result<venue::Model> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("Venue name is required.".to_string()));
        }

        let txn = self.db.begin().await?;

        let state = lookups::resolve_state(&txn, &input.state).await?;
        let city = lookups::resolve_city(&txn, &input.city, state.id).await?;
        let genres = lookups::resolve_genres(&txn, &input.genres).await?;

        let now = Utc::now().into();
        let created = venue::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            phone: Set(input.phone),
            website: Set(input.website),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            seeking_talent: Set(input.seeking_talent),
            seeking_description: Set(input.seeking_description),
            city_id: Set(city.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_genres(&txn, created.id, &genres).await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Mutate an existing venue in place. The row keeps its identity; the
    /// city and genres are re-resolved through the same lookup-or-create
    /// path as creation, even when their names are unchanged.
    pub async fn update(&self, id: i32, input: UpdateVenueInput) -> Result<venue::Model> {
        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {id}")))?;

        let state = lookups::resolve_state(&txn, &input.state).await?;
        let city = lookups::resolve_city(&txn, &input.city, state.id).await?;
        let genres = lookups::resolve_genres(&txn, &input.genres).await?;

        let mut active: venue::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.address = Set(input.address);
        active.phone = Set(input.phone);
        active.facebook_link = Set(input.facebook_link);
        active.city_id = Set(city.id);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        venue_genre::Entity::delete_many()
            .filter(venue_genre::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        link_genres(&txn, id, &genres).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Delete a venue and everything that references it. The shows and
    /// genre links go first, then the venue row, all in one transaction.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {id}")))?;

        show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        venue_genre::Entity::delete_many()
            .filter(venue_genre::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find().all(&self.db).await?)
    }

    /// Case-insensitive substring match on the venue name.
    pub async fn search(&self, term: &str) -> Result<SearchResult<venue::Model>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let query = venue::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col((venue::Entity, venue::Column::Name))))
                .like(pattern.as_str()),
        );

        let count = query.clone().count(&self.db).await?;
        let items = query.all(&self.db).await?;
        Ok(SearchResult { count, items })
    }
}

/// Insert the venue->genre links, once per distinct genre. Resolved genres
/// may contain the same row twice when the submitted names repeated.
async fn link_genres<C: ConnectionTrait>(
    conn: &C,
    venue_id: i32,
    genres: &[genre::Model],
) -> Result<()> {
    let mut seen = HashSet::new();
    for g in genres {
        if seen.insert(g.id) {
            venue_genre::Entity::insert(venue_genre::ActiveModel {
                venue_id: Set(venue_id),
                genre_id: Set(g.id),
            })
            .exec(conn)
            .await?;
        }
    }
    Ok(())
}
