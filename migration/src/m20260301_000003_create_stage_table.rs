use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_championship_table::Championship;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stage::Table)
                    .if_not_exists()
                    .col(pk_auto(Stage::Id))
                    .col(integer(Stage::ChampionshipId))
                    .col(integer(Stage::Number))
                    .col(string(Stage::Title))
                    .col(text_null(Stage::Description))
                    .col(string(Stage::Location))
                    .col(string_null(Stage::MapLink))
                    .col(timestamp_with_time_zone(Stage::StartsAt))
                    .col(boolean(Stage::IsActive).default(false))
                    .col(timestamp_with_time_zone(Stage::CreatedAt))
                    .col(timestamp_with_time_zone(Stage::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stage_championship_id")
                            .from(Stage::Table, Stage::ChampionshipId)
                            .to(Championship::Table, Championship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stage_starts_at")
                    .table(Stage::Table)
                    .col(Stage::StartsAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stage {
    #[sea_orm(iden = "stages")]
    Table,
    Id,
    ChampionshipId,
    Number,
    Title,
    Description,
    Location,
    MapLink,
    StartsAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
