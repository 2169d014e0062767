use std::collections::HashSet;

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::db::entities::{artist, artist_genre, genre, show};
use crate::db::lookups;
use crate::error::{AppError, Result};

use super::SearchResult;

pub struct CreateArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

pub struct UpdateArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CreateArtistInput) -> Result<artist::Model> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("Artist name is required.".to_string()));
        }

        let txn = self.db.begin().await?;

        let state = lookups::resolve_state(&txn, &input.state).await?;
        let city = lookups::resolve_city(&txn, &input.city, state.id).await?;
        let genres = lookups::resolve_genres(&txn, &input.genres).await?;

        let now = Utc::now().into();
        let created = artist::ActiveModel {
            name: Set(input.name),
            phone: Set(input.phone),
            website: Set(input.website),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            seeking_venue: Set(input.seeking_venue),
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

    pub async fn update(&self, id: i32, input: UpdateArtistInput) -> Result<artist::Model> {
        let txn = self.db.begin().await?;

        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {id}")))?;

        let state = lookups::resolve_state(&txn, &input.state).await?;
        let city = lookups::resolve_city(&txn, &input.city, state.id).await?;
        let genres = lookups::resolve_genres(&txn, &input.genres).await?;

        let mut active: artist::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.phone = Set(input.phone);
        active.facebook_link = Set(input.facebook_link);
        active.city_id = Set(city.id);
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        artist_genre::Entity::delete_many()
            .filter(artist_genre::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;
        link_genres(&txn, id, &genres).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Repository primitive only; no HTTP route exposes artist deletion.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {id}")))?;

        show::Entity::delete_many()
            .filter(show::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;
        artist_genre::Entity::delete_many()
            .filter(artist_genre::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find().all(&self.db).await?)
    }

    /// Case-insensitive substring match on the artist name.
    pub async fn search(&self, term: &str) -> Result<SearchResult<artist::Model>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let query = artist::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col((artist::Entity, artist::Column::Name))))
                .like(pattern.as_str()),
        );

        let count = query.clone().count(&self.db).await?;
        let items = query.all(&self.db).await?;
        Ok(SearchResult { count, items })
    }
}

async fn link_genres<C: ConnectionTrait>(
    conn: &C,
    artist_id: i32,
    genres: &[genre::Model],
) -> Result<()> {
    let mut seen = HashSet::new();
    for g in genres {
        if seen.insert(g.id) {
            artist_genre::Entity::insert(artist_genre::ActiveModel {
                artist_id: Set(artist_id),
                genre_id: Set(g.id),
            })
            .exec(conn)
            .await?;
        }
    }
    Ok(())
}
