use sea_orm::entity::prelude::*;

/// One reaction of one user on one artwork. The composite primary key is the
/// uniqueness constraint the toggle relies on.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub artwork_id: Uuid,
    /// One of `love`, `mind_blown`, `cosmic`, `transcendent`, `mystical`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::artworks::Entity",
        from = "Column::ArtworkId",
        to = "super::artworks::Column::Id",
        on_delete = "Cascade"
    )]
    Artwork,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::artworks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artwork.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
