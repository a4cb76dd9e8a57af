//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing the site content
//! - `validation`: Field-level write-time checks
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
pub mod validation;

pub use validation::ValidationError;
