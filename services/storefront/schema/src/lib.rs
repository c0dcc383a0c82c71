//! sea-orm entities for the storefront database.

pub mod artworks;
pub mod comment_likes;
pub mod comments;
pub mod reactions;
pub mod users;
