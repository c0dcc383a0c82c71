pub mod ai;
pub mod artwork;
pub mod auth;
pub mod checkout;
pub mod comment;
pub mod community;
pub mod health;
pub mod reaction;
