pub mod artwork;
pub mod auth;
pub mod checkout;
pub mod comment;
pub mod comment_like;
pub mod community;
pub mod describe;
pub mod reaction;
pub mod synthesize;
