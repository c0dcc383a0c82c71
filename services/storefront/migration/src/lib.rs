pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_users;
mod m20261001_000002_create_artworks;
mod m20261001_000003_create_comments;
mod m20261001_000004_create_reactions;
mod m20261001_000005_create_comment_likes;
mod m20261001_000006_add_community_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_users::Migration),
            Box::new(m20261001_000002_create_artworks::Migration),
            Box::new(m20261001_000003_create_comments::Migration),
            Box::new(m20261001_000004_create_reactions::Migration),
            Box::new(m20261001_000005_create_comment_likes::Migration),
            Box::new(m20261001_000006_add_community_indexes::Migration),
        ]
    }
}
