//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod storage;

pub use postgres::{
    ensure_schema, PostgresContactMessageRepository, PostgresJobOfferRepository,
    PostgresPageRepository, PostgresSiteConfigurationRepository,
};
pub use storage::LocalFileStorage;
