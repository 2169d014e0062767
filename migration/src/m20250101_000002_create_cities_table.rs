use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_states_table::States;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cities::Name)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cities::StateId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_state_id")
                            .from(Cities::Table, Cities::StateId)
                            .to(States::Table, States::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Get-or-create looks cities up by (name, state)
        manager
            .create_index(
                Index::create()
                    .name("idx_cities_name_state_id")
                    .table(Cities::Table)
                    .col(Cities::Name)
                    .col(Cities::StateId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cities {
    Table,
    Id,
    Name,
    StateId,
}
