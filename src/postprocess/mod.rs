//! Post-build passes over the output directory.

mod collector;
mod css;
mod html;
mod sitemap;

pub use collector::PageQueue;
pub use css::{find_css_files, minify_css, minify_css_files};
pub use html::{minify_html, prettify_html, HtmlMode};
pub use sitemap::{render_sitemap, write_sitemap, SITEMAP_FILE, SITEMAP_NAMESPACE};
