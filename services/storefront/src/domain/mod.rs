pub mod moderation;
pub mod repository;
pub mod types;
