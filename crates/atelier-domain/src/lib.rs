//! Domain types shared across the Atelier workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod cart;
pub mod id;
pub mod pagination;
pub mod print;
pub mod reaction;
pub mod user;
