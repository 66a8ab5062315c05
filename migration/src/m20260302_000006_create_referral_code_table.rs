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
                    .table(ReferralCode::Table)
                    .if_not_exists()
                    .col(pk_auto(ReferralCode::Id))
                    .col(integer(ReferralCode::ScopeId))
                    .col(big_integer(ReferralCode::IssuerId))
                    .col(string_uniq(ReferralCode::Code))
                    .col(string_len(ReferralCode::Role, 16))
                    .col(timestamp_with_time_zone(ReferralCode::ExpiresAt))
                    .col(boolean(ReferralCode::Activated).default(false))
                    .col(timestamp_with_time_zone(ReferralCode::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referral_code_issuer_id")
                            .from(ReferralCode::Table, ReferralCode::IssuerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_referral_code_scope_id")
                    .table(ReferralCode::Table)
                    .col(ReferralCode::ScopeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReferralCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferralCode {
    #[sea_orm(iden = "referral_codes")]
    Table,
    Id,
    ScopeId,
    IssuerId,
    Code,
    Role,
    ExpiresAt,
    Activated,
    CreatedAt,
}
