use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FileRef::Table)
                    .if_not_exists()
                    .col(pk_auto(FileRef::Id))
                    .col(string_len(FileRef::ParentType, 32))
                    .col(integer(FileRef::ParentId))
                    .col(integer(FileRef::Position))
                    .col(string_uniq(FileRef::Key))
                    .col(string(FileRef::Bucket))
                    .col(string(FileRef::Name))
                    .col(big_integer(FileRef::Size))
                    .col(string_len(FileRef::Format, 16))
                    .col(string_len(FileRef::Kind, 16))
                    .col(timestamp_with_time_zone(FileRef::UploadedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_file_ref_parent")
                    .table(FileRef::Table)
                    .col(FileRef::ParentType)
                    .col(FileRef::ParentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FileRef::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FileRef {
    #[sea_orm(iden = "file_refs")]
    Table,
    Id,
    ParentType,
    ParentId,
    Position,
    Key,
    Bucket,
    Name,
    Size,
    Format,
    Kind,
    UploadedAt,
}
