//! HTTP handlers
//!
//! Axum request handlers for the public site.

pub mod contact;
pub mod pages;
pub mod recruitment;

pub use contact::submit_contact;
pub use pages::{append_slash, home, static_page};
pub use recruitment::{job_detail, list_jobs};
