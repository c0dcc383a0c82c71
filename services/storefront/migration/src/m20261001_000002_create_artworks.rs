use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artworks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Artworks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Artworks::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Artworks::Description).text().null())
                    .col(ColumnDef::new(Artworks::MediaUrl).text().not_null())
                    .col(ColumnDef::new(Artworks::Width).integer().not_null())
                    .col(ColumnDef::new(Artworks::Height).integer().not_null())
                    .col(
                        ColumnDef::new(Artworks::MediaHash)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Artworks::AiMetadata).json_binary().null())
                    .col(ColumnDef::new(Artworks::UploaderId).uuid().not_null())
                    .col(
                        ColumnDef::new(Artworks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Artworks::Table, Artworks::UploaderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artworks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Artworks {
    Table,
    Id,
    Title,
    Description,
    MediaUrl,
    Width,
    Height,
    MediaHash,
    AiMetadata,
    UploaderId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
