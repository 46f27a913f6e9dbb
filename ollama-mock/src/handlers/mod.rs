//! HTTP handlers for the mock inference API.

pub mod generate;
pub mod health;
pub mod models;

pub use generate::generate;
pub use health::{health_check, metrics_endpoint, ping};
pub use models::list_models;
