//! HTTP plumbing shared by Atelier services.

pub mod client_ip;
pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
