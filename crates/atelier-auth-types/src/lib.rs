//! Auth types shared across the Atelier workspace.
//!
//! Provides JWT issue/validation, the access-token cookie builders, and the
//! `Identity` / `OptionalIdentity` extractors.

pub mod cookie;
pub mod identity;
pub mod token;
