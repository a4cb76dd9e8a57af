//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod contact_message_repo;
pub mod job_offer_repo;
pub mod page_repo;
pub mod schema;
pub mod site_configuration_repo;


use sea_orm::{DbErr, SqlErr};

use crate::error::DomainError;

pub use contact_message_repo::PostgresContactMessageRepository;
pub use job_offer_repo::PostgresJobOfferRepository;
pub use page_repo::PostgresPageRepository;
pub use schema::ensure_schema;
pub use site_configuration_repo::PostgresSiteConfigurationRepository;

/// Whether a write failed on a unique constraint
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Map an insert failure, turning unique constraint violations into `AlreadyExists`
fn map_insert_err(err: DbErr, what: impl FnOnce() -> String) -> DomainError {
    if is_unique_violation(&err) {
        DomainError::AlreadyExists(what())
    } else {
        DomainError::Database(err.to_string())
    }
}
