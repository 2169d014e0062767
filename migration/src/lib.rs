pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_states_table;
mod m20250101_000002_create_cities_table;
mod m20250101_000003_create_genres_table;
mod m20250101_000004_create_venues_table;
mod m20250101_000005_create_artists_table;
mod m20250101_000006_create_shows_table;
mod m20250101_000007_create_genre_link_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_states_table::Migration),
            Box::new(m20250101_000002_create_cities_table::Migration),
            Box::new(m20250101_000003_create_genres_table::Migration),
            Box::new(m20250101_000004_create_venues_table::Migration),
            Box::new(m20250101_000005_create_artists_table::Migration),
            Box::new(m20250101_000006_create_shows_table::Migration),
            Box::new(m20250101_000007_create_genre_link_tables::Migration),
        ]
    }
}
