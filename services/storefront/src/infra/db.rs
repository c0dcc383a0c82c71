use std::collections::{HashMap, HashSet};

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use atelier_core::sea_ext::OrderByRandom;
use atelier_domain::id::{ArtworkId, CommentId, UserId};
use atelier_domain::pagination::{PageRequest, Sort};
use atelier_domain::reaction::ReactionKind;
use atelier_domain::user::UserRole;
use atelier_storefront_schema::{artworks, comment_likes, comments, reactions, users};

use crate::domain::repository::{
    ArtworkRepository, CommentLikeRepository, CommentRepository, ReactionRepository,
    UserRepository,
};
use crate::domain::types::{Artwork, ArtworkSortBy, Comment, CommentAuthor, User};
use crate::error::StorefrontError;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Constraint names are set in the migrations.
const FK_COMMENTS_USER: &str = "fk_comments_user_id";
const FK_REACTIONS_USER: &str = "fk_reactions_user_id";
const FK_COMMENT_LIKES_USER: &str = "fk_comment_likes_user_id";

fn foreign_key_message(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => Some(message),
        _ => None,
    }
}

/// A vanished author means the session outlived its account; anything else
/// is the parent row.
fn foreign_key_error(
    message: &str,
    user_constraint: &str,
    parent: StorefrontError,
) -> StorefrontError {
    if message.contains(user_constraint) {
        StorefrontError::Unauthorized
    } else {
        parent
    }
}

fn missing_reference(
    err: DbErr,
    user_constraint: &str,
    parent: StorefrontError,
    context: &'static str,
) -> StorefrontError {
    match foreign_key_message(&err) {
        Some(message) => foreign_key_error(&message, user_constraint, parent),
        None => internal(err, context),
    }
}

fn internal(err: DbErr, context: &'static str) -> StorefrontError {
    StorefrontError::Internal(anyhow::Error::new(err).context(context))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &User) -> Result<(), StorefrontError> {
        let result = users::ActiveModel {
            id: Set(user.id.into()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(i16::from(user.role.as_u8())),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StorefrontError::EmailTaken),
            Err(e) => Err(internal(e, "create user")),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StorefrontError> {
        let model = users::Entity::find_by_id(Uuid::from(id))
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorefrontError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id.into(),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role: u8::try_from(model.role)
            .ok()
            .and_then(UserRole::from_u8)
            .unwrap_or(UserRole::User),
        created_at: model.created_at,
    }
}

// ── Artwork repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbArtworkRepository {
    pub db: DatabaseConnection,
}

impl ArtworkRepository for DbArtworkRepository {
    async fn create(&self, artwork: &Artwork) -> Result<(), StorefrontError> {
        let result = artworks::ActiveModel {
            id: Set(artwork.id.into()),
            title: Set(artwork.title.clone()),
            description: Set(artwork.description.clone()),
            media_url: Set(artwork.media_url.clone()),
            width: Set(i32::try_from(artwork.width).unwrap_or(i32::MAX)),
            height: Set(i32::try_from(artwork.height).unwrap_or(i32::MAX)),
            media_hash: Set(artwork.media_hash.clone()),
            ai_metadata: Set(artwork.ai_metadata.clone()),
            uploader_id: Set(artwork.uploader_id.into()),
            created_at: Set(artwork.created_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StorefrontError::ArtworkAlreadyExists),
            Err(e) => Err(internal(e, "create artwork")),
        }
    }

    async fn find_by_id(&self, id: ArtworkId) -> Result<Option<Artwork>, StorefrontError> {
        let model = artworks::Entity::find_by_id(Uuid::from(id))
            .one(&self.db)
            .await
            .context("find artwork by id")?;
        Ok(model.map(artwork_from_model))
    }

    async fn find_by_ids(&self, ids: &[ArtworkId]) -> Result<Vec<Artwork>, StorefrontError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = artworks::Entity::find()
            .filter(artworks::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(&self.db)
            .await
            .context("find artworks by ids")?;
        Ok(models.into_iter().map(artwork_from_model).collect())
    }

    async fn exists(&self, id: ArtworkId) -> Result<bool, StorefrontError> {
        let count = artworks::Entity::find_by_id(Uuid::from(id))
            .count(&self.db)
            .await
            .context("check artwork exists")?;
        Ok(count > 0)
    }

    async fn list(
        &self,
        sort_by: ArtworkSortBy,
        page: PageRequest,
    ) -> Result<Vec<Artwork>, StorefrontError> {
        let page = page.clamped();
        let query = artworks::Entity::find();
        let query = match sort_by {
            ArtworkSortBy::CreatedAt(Sort::Desc) => query
                .order_by_desc(artworks::Column::CreatedAt)
                .order_by_desc(artworks::Column::Id),
            ArtworkSortBy::CreatedAt(Sort::Asc) => query
                .order_by_asc(artworks::Column::CreatedAt)
                .order_by_asc(artworks::Column::Id),
            ArtworkSortBy::Random => query.order_by_random(),
        };
        let models = query
            .offset(page.offset())
            .limit(u64::from(page.per_page))
            .all(&self.db)
            .await
            .context("list artworks")?;
        Ok(models.into_iter().map(artwork_from_model).collect())
    }

    async fn sample(&self, count: u32) -> Result<Vec<Artwork>, StorefrontError> {
        let models = artworks::Entity::find()
            .sample(u64::from(count))
            .all(&self.db)
            .await
            .context("sample artworks")?;
        Ok(models.into_iter().map(artwork_from_model).collect())
    }

    async fn delete(&self, id: ArtworkId) -> Result<bool, StorefrontError> {
        let result = artworks::Entity::delete_by_id(Uuid::from(id))
            .exec(&self.db)
            .await
            .context("delete artwork")?;
        Ok(result.rows_affected > 0)
    }
}

fn artwork_from_model(model: artworks::Model) -> Artwork {
    Artwork {
        id: model.id.into(),
        title: model.title,
        description: model.description,
        media_url: model.media_url,
        width: u32::try_from(model.width).unwrap_or_default(),
        height: u32::try_from(model.height).unwrap_or_default(),
        media_hash: model.media_hash,
        ai_metadata: model.ai_metadata,
        uploader_id: model.uploader_id.into(),
        created_at: model.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<(), StorefrontError> {
        let result = comments::ActiveModel {
            id: Set(comment.id.into()),
            content: Set(comment.content.clone()),
            user_id: Set(comment.user_id.into()),
            artwork_id: Set(comment.artwork_id.into()),
            created_at: Set(comment.created_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(missing_reference(
                e,
                FK_COMMENTS_USER,
                StorefrontError::ArtworkNotFound,
                "create comment",
            )),
        }
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, StorefrontError> {
        let model = comments::Entity::find_by_id(Uuid::from(id))
            .one(&self.db)
            .await
            .context("find comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn list_for_artwork(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<Vec<(Comment, CommentAuthor)>, StorefrontError> {
        let rows = comments::Entity::find()
            .filter(comments::Column::ArtworkId.eq(Uuid::from(artwork_id)))
            .order_by_desc(comments::Column::CreatedAt)
            .order_by_desc(comments::Column::Id)
            .find_also_related(users::Entity)
            .all(&self.db)
            .await
            .context("list comments for artwork")?;
        // The FK cascades, so an orphaned comment is only visible mid-delete.
        Ok(rows
            .into_iter()
            .filter_map(|(comment, author)| {
                let author = author?;
                Some((
                    comment_from_model(comment),
                    CommentAuthor {
                        id: author.id.into(),
                        name: author.name,
                    },
                ))
            })
            .collect())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, StorefrontError> {
        let result = comments::Entity::delete_by_id(Uuid::from(id))
            .exec(&self.db)
            .await
            .context("delete comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: comments::Model) -> Comment {
    Comment {
        id: model.id.into(),
        content: model.content,
        user_id: model.user_id.into(),
        artwork_id: model.artwork_id.into(),
        created_at: model.created_at,
    }
}

// ── Reaction repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReactionRepository {
    pub db: DatabaseConnection,
}

impl ReactionRepository for DbReactionRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
        kind: ReactionKind,
    ) -> Result<bool, StorefrontError> {
        let row = reactions::ActiveModel {
            user_id: Set(user_id.into()),
            artwork_id: Set(artwork_id.into()),
            kind: Set(kind.as_str().to_owned()),
            created_at: Set(Utc::now()),
        };
        let inserted = reactions::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    reactions::Column::UserId,
                    reactions::Column::ArtworkId,
                    reactions::Column::Kind,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;
        match inserted {
            Ok(n) if n > 0 => return Ok(true),
            Ok(_) => {}
            Err(e) => {
                return Err(missing_reference(
                    e,
                    FK_REACTIONS_USER,
                    StorefrontError::ArtworkNotFound,
                    "insert reaction",
                ));
            }
        }

        // Conflict: the reaction already existed, so this toggle removes it.
        reactions::Entity::delete_many()
            .filter(reactions::Column::UserId.eq(Uuid::from(user_id)))
            .filter(reactions::Column::ArtworkId.eq(Uuid::from(artwork_id)))
            .filter(reactions::Column::Kind.eq(kind.as_str()))
            .exec(&self.db)
            .await
            .context("delete reaction")?;
        Ok(false)
    }

    async fn count(
        &self,
        artwork_id: ArtworkId,
        kind: ReactionKind,
    ) -> Result<u64, StorefrontError> {
        let count = reactions::Entity::find()
            .filter(reactions::Column::ArtworkId.eq(Uuid::from(artwork_id)))
            .filter(reactions::Column::Kind.eq(kind.as_str()))
            .count(&self.db)
            .await
            .context("count reactions")?;
        Ok(count)
    }

    async fn counts_by_kind(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<HashMap<ReactionKind, u64>, StorefrontError> {
        let rows: Vec<(String, i64)> = reactions::Entity::find()
            .select_only()
            .column(reactions::Column::Kind)
            .column_as(Expr::col(reactions::Column::UserId).count(), "count")
            .filter(reactions::Column::ArtworkId.eq(Uuid::from(artwork_id)))
            .group_by(reactions::Column::Kind)
            .into_tuple()
            .all(&self.db)
            .await
            .context("count reactions by kind")?;
        Ok(rows
            .into_iter()
            .filter_map(|(kind, count)| {
                let kind = kind.parse::<ReactionKind>().ok()?;
                Some((kind, u64::try_from(count).unwrap_or_default()))
            })
            .collect())
    }

    async fn kinds_by_user(
        &self,
        artwork_id: ArtworkId,
        user_id: UserId,
    ) -> Result<HashSet<ReactionKind>, StorefrontError> {
        let kinds: Vec<String> = reactions::Entity::find()
            .select_only()
            .column(reactions::Column::Kind)
            .filter(reactions::Column::ArtworkId.eq(Uuid::from(artwork_id)))
            .filter(reactions::Column::UserId.eq(Uuid::from(user_id)))
            .into_tuple()
            .all(&self.db)
            .await
            .context("list user reactions")?;
        Ok(kinds.into_iter().filter_map(|k| k.parse().ok()).collect())
    }
}

// ── Comment like repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentLikeRepository {
    pub db: DatabaseConnection,
}

impl CommentLikeRepository for DbCommentLikeRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> Result<bool, StorefrontError> {
        let row = comment_likes::ActiveModel {
            user_id: Set(user_id.into()),
            comment_id: Set(comment_id.into()),
            created_at: Set(Utc::now()),
        };
        let inserted = comment_likes::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    comment_likes::Column::UserId,
                    comment_likes::Column::CommentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await;
        match inserted {
            Ok(n) if n > 0 => return Ok(true),
            Ok(_) => {}
            Err(e) => {
                return Err(missing_reference(
                    e,
                    FK_COMMENT_LIKES_USER,
                    StorefrontError::CommentNotFound,
                    "insert comment like",
                ));
            }
        }

        comment_likes::Entity::delete_many()
            .filter(comment_likes::Column::UserId.eq(Uuid::from(user_id)))
            .filter(comment_likes::Column::CommentId.eq(Uuid::from(comment_id)))
            .exec(&self.db)
            .await
            .context("delete comment like")?;
        Ok(false)
    }

    async fn count(&self, comment_id: CommentId) -> Result<u64, StorefrontError> {
        let count = comment_likes::Entity::find()
            .filter(comment_likes::Column::CommentId.eq(Uuid::from(comment_id)))
            .count(&self.db)
            .await
            .context("count comment likes")?;
        Ok(count)
    }

    async fn counts_for(
        &self,
        comment_ids: &[CommentId],
    ) -> Result<HashMap<CommentId, u64>, StorefrontError> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(Uuid, i64)> = comment_likes::Entity::find()
            .select_only()
            .column(comment_likes::Column::CommentId)
            .column_as(Expr::col(comment_likes::Column::UserId).count(), "count")
            .filter(comment_likes::Column::CommentId.is_in(comment_ids.iter().map(|id| id.0)))
            .group_by(comment_likes::Column::CommentId)
            .into_tuple()
            .all(&self.db)
            .await
            .context("count comment likes by comment")?;
        Ok(rows
            .into_iter()
            .map(|(id, count)| (id.into(), u64::try_from(count).unwrap_or_default()))
            .collect())
    }

    async fn liked_by(
        &self,
        user_id: UserId,
        comment_ids: &[CommentId],
    ) -> Result<HashSet<CommentId>, StorefrontError> {
        if comment_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let ids: Vec<Uuid> = comment_likes::Entity::find()
            .select_only()
            .column(comment_likes::Column::CommentId)
            .filter(comment_likes::Column::UserId.eq(Uuid::from(user_id)))
            .filter(comment_likes::Column::CommentId.is_in(comment_ids.iter().map(|id| id.0)))
            .into_tuple()
            .all(&self.db)
            .await
            .context("list liked comments")?;
        Ok(ids.into_iter().map(CommentId::from).collect())
    }
}
