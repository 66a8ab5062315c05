use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Championship::Table)
                    .if_not_exists()
                    .col(pk_auto(Championship::Id))
                    .col(big_integer(Championship::UserId))
                    .col(string(Championship::Title))
                    .col(text_null(Championship::Description))
                    .col(integer(Championship::StagesCount))
                    .col(boolean(Championship::IsActive).default(false))
                    .col(timestamp_with_time_zone(Championship::CreatedAt))
                    .col(timestamp_with_time_zone(Championship::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_championship_user_id")
                            .from(Championship::Table, Championship::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Championship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Championship {
    #[sea_orm(iden = "championships")]
    Table,
    Id,
    UserId,
    Title,
    Description,
    StagesCount,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
