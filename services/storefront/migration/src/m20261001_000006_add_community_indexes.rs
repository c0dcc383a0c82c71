use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Comments::Table)
                    .col(Comments::ArtworkId)
                    .col(Comments::CreatedAt)
                    .name("idx_comments_artwork_id_created_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Reactions::Table)
                    .col(Reactions::ArtworkId)
                    .col(Reactions::Kind)
                    .name("idx_reactions_artwork_id_kind")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(CommentLikes::Table)
                    .col(CommentLikes::CommentId)
                    .name("idx_comment_likes_comment_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Artworks::Table)
                    .col(Artworks::CreatedAt)
                    .name("idx_artworks_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_artworks_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comment_likes_comment_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reactions_artwork_id_kind").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_comments_artwork_id_created_at")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Comments {
    Table,
    ArtworkId,
    CreatedAt,
}

#[derive(Iden)]
enum Reactions {
    Table,
    ArtworkId,
    Kind,
}

#[derive(Iden)]
enum CommentLikes {
    Table,
    CommentId,
}

#[derive(Iden)]
enum Artworks {
    Table,
    CreatedAt,
}
