//! Material Design theme support for documentation builds.
//!
//! Converts table-of-contents trees into the navigation structure the theme's
//! templates expect, builds the per-page template context, and runs the
//! post-build passes (sitemap, HTML and CSS reformatting).

pub mod cli;
pub mod config;
pub mod context;
pub mod hooks;
pub mod merge;
pub mod postprocess;
pub mod toc;
pub mod utils;
