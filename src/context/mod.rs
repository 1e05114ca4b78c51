//! Template context for the Material theme's page layout.

mod nav;
mod page;

pub use nav::{global_navigation, local_toc, prune_toctree, Homepage, Navigation};
pub use page::{build_page_context, PageLink, PageMeta, PageSource};
