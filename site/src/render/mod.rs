//! Render module
//!
//! Server-side HTML rendering of the public pages.

pub mod html;

pub use html::{escape_html, render_home, render_job, render_page, render_recruitment};
