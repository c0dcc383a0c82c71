//! Test utilities for Atelier services.
//!
//! Import from `[dev-dependencies]` only.

pub mod auth;
pub mod json;
