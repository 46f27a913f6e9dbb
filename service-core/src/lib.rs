//! service-core: Shared infrastructure for the mock services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
