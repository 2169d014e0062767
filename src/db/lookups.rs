//! Get-or-create lookups for the reference entities (State, City, Genre).
//!
//! All of these are generic over [`ConnectionTrait`] so they can run inside
//! the caller's transaction: a row created here only survives if that
//! transaction commits, and a second resolve inside the same transaction
//! finds the row the first one inserted.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::db::entities::{city, genre, state};
use crate::error::Result;

/// Look a state up by exact name, inserting it if absent.
///
/// Empty or duplicate names are accepted as-is; there is no uniqueness
/// enforcement beyond the lookup itself.
pub async fn resolve_state<C: ConnectionTrait>(conn: &C, name: &str) -> Result<state::Model> {
    if let Some(existing) = state::Entity::find()
        .filter(state::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let created = state::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(created)
}

/// Look a city up by its (name, state) natural key, inserting it if absent.
///
/// Callers resolve the state first so `state_id` is valid within the same
/// transaction even when the state row is itself new.
pub async fn resolve_city<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    state_id: i32,
) -> Result<city::Model> {
    if let Some(existing) = city::Entity::find()
        .filter(city::Column::Name.eq(name))
        .filter(city::Column::StateId.eq(state_id))
        .one(conn)
        .await?
    {
        return Ok(existing);
    }

    let created = city::ActiveModel {
        name: Set(name.to_string()),
        state_id: Set(state_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(created)
}

/// Resolve every genre name independently, preserving input order.
///
/// A repeated input name resolves to the same row both times: the second
/// lookup sees what the first insert created.
pub async fn resolve_genres<C: ConnectionTrait>(
    conn: &C,
    names: &[String],
) -> Result<Vec<genre::Model>> {
    let mut genres = Vec::with_capacity(names.len());
    for name in names {
        let existing = genre::Entity::find()
            .filter(genre::Column::Name.eq(name))
            .one(conn)
            .await?;

        let resolved = match existing {
            Some(g) => g,
            None => {
                genre::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(conn)
                .await?
            }
        };
        genres.push(resolved);
    }
    Ok(genres)
}
