use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000003_create_stage_table::Stage,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Judge::Table)
                    .if_not_exists()
                    .col(pk_auto(Judge::Id))
                    .col(big_integer(Judge::UserId))
                    .col(integer(Judge::StageId))
                    .col(string(Judge::FullName))
                    .col(string_len(Judge::Criterion, 16))
                    .col(boolean(Judge::IsActive).default(true))
                    .col(timestamp_with_time_zone(Judge::CreatedAt))
                    .col(timestamp_with_time_zone(Judge::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_judge_stage_id")
                            .from(Judge::Table, Judge::StageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_judge_user_id")
                            .from(Judge::Table, Judge::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(pk_auto(Pilot::Id))
                    .col(big_integer(Pilot::UserId))
                    .col(integer(Pilot::StageId))
                    .col(string(Pilot::FullName))
                    .col(integer(Pilot::Age))
                    .col(text(Pilot::Description))
                    .col(string(Pilot::Car))
                    .col(integer(Pilot::Number))
                    .col(boolean(Pilot::IsActive).default(true))
                    .col(timestamp_with_time_zone(Pilot::CreatedAt))
                    .col(timestamp_with_time_zone(Pilot::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_stage_id")
                            .from(Pilot::Table, Pilot::StageId)
                            .to(Stage::Table, Stage::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pilot_user_id")
                            .from(Pilot::Table, Pilot::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Racing numbers are unique within a stage.
        manager
            .create_index(
                Index::create()
                    .unique()
                    .name("idx_pilot_stage_number_unique")
                    .table(Pilot::Table)
                    .col(Pilot::StageId)
                    .col(Pilot::Number)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Judge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Judge {
    #[sea_orm(iden = "judges")]
    Table,
    Id,
    UserId,
    StageId,
    FullName,
    Criterion,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Pilot {
    #[sea_orm(iden = "pilots")]
    Table,
    Id,
    UserId,
    StageId,
    FullName,
    Age,
    Description,
    Car,
    Number,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
