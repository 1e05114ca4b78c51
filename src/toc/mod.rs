//! Conversion of document-outline trees into theme navigation entries.
//!
//! The global (site-wide) view drops entries that only point into the page
//! being rendered; the local view keeps every heading.

mod converter;
mod node;
mod render;

pub use converter::{convert, NavNode, TocConverter};
pub use node::{Inline, SourceNode};
pub use render::{InlineRenderer, PlainRenderer};
