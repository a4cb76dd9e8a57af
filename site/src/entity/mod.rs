//! SeaORM entities
//!
//! Table definitions. Domain conversions live in the postgres adapters.

pub mod contact_messages;
pub mod job_offers;
pub mod pages;
pub mod site_configuration;
