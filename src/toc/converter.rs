use serde::{Deserialize, Serialize};

use crate::toc::node::{Inline, SourceNode};
use crate::toc::render::{InlineRenderer, PlainRenderer};
use crate::utils::path::is_fragment_only;

/// Navigation entry in the theme's format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    pub title: String,
    pub url: Option<String>,
    pub children: Vec<NavNode>,
    pub active: bool,
}

/// Child entry collected by an accumulator
#[derive(Debug)]
struct Entry {
    node: NavNode,
    /// Came from a list item whose subtree only links into the current page
    prunable: bool,
}

/// Traversal state for one navigation entry
#[derive(Debug)]
struct Accumulator {
    title: Option<String>,
    url: Option<String>,
    children: Vec<Entry>,
    /// Marked current by the source tree itself
    current: bool,
    active: bool,
    /// No reference to another page has been seen under this entry yet
    local_only: bool,
}

impl Accumulator {
    fn new(current: bool) -> Self {
        Self {
            title: None,
            url: None,
            children: Vec::new(),
            current,
            active: current,
            local_only: true,
        }
    }

    fn push(&mut self, node: NavNode, local_only: bool, prunable: bool) {
        self.active |= node.active;
        if !local_only {
            self.local_only = false;
        }
        self.children.push(Entry { node, prunable });
    }

    /// Finish accumulating. Local-only entries are dropped only once it is
    /// known that nothing under this accumulator leaves the page.
    fn close(mut self, exclude_local: bool) -> Self {
        if exclude_local && self.local_only {
            self.children.retain(|entry| !entry.prunable);
        }
        // Only entries that survived pruning mark this one active
        self.active = self.current || self.children.iter().any(|entry| entry.node.active);
        self
    }

    fn into_children(self) -> Vec<NavNode> {
        self.children.into_iter().map(|entry| entry.node).collect()
    }

    fn into_node(self) -> NavNode {
        NavNode {
            title: self.title.unwrap_or_default(),
            url: self.url,
            active: self.active,
            children: self.children.into_iter().map(|entry| entry.node).collect(),
        }
    }
}

/// Converts a document-outline tree into navigation entries
pub struct TocConverter<'r, R: InlineRenderer + ?Sized = PlainRenderer> {
    renderer: &'r R,
    exclude_local: bool,
}

impl<'r, R: InlineRenderer + ?Sized> TocConverter<'r, R> {
    /// `exclude_local` selects the site-wide view, where entries that only
    /// point into the current page are pruned.
    pub fn new(renderer: &'r R, exclude_local: bool) -> Self {
        Self {
            renderer,
            exclude_local,
        }
    }

    pub fn convert(&self, root: &SourceNode) -> Vec<NavNode> {
        let mut acc = Accumulator::new(false);
        self.walk(root, &mut acc);
        acc.close(self.exclude_local).into_children()
    }

    fn walk(&self, node: &SourceNode, acc: &mut Accumulator) {
        match node {
            SourceNode::Reference { title, refuri } => {
                acc.title = Some(self.renderer.render_text(title));
                acc.url = refuri.clone();
                if refuri.as_deref().map_or(false, |url| !is_fragment_only(url)) {
                    acc.local_only = false;
                }
            }
            // A caption only matters right before a sibling list
            SourceNode::Caption { .. } => {}
            SourceNode::BulletList {
                children,
                iscurrent,
            } => {
                if *iscurrent {
                    acc.current = true;
                    acc.active = true;
                }
                self.walk_siblings(children, acc);
            }
            SourceNode::ListItem {
                children,
                iscurrent,
            } => {
                let mut item = Accumulator::new(*iscurrent);
                self.walk_siblings(children, &mut item);
                let item = item.close(self.exclude_local);
                let local_only = item.local_only;
                acc.push(item.into_node(), local_only, local_only);
            }
            SourceNode::Toctree { .. } => {}
            SourceNode::Paragraph { children } | SourceNode::CompactParagraph { children } => {
                self.walk_siblings(children, acc);
            }
        }
    }

    fn walk_siblings(&self, nodes: &[SourceNode], acc: &mut Accumulator) {
        let mut caption: Option<&[Inline]> = None;

        for node in nodes {
            match (node, caption.take()) {
                (SourceNode::Caption { title }, _) => caption = Some(title.as_slice()),
                (
                    SourceNode::BulletList {
                        children,
                        iscurrent,
                    },
                    Some(title),
                ) => self.push_group(title, children, *iscurrent, acc),
                (other, _) => self.walk(other, acc),
            }
        }
    }

    /// Captioned list: one entry titled by the caption, holding the list items
    fn push_group(&self, title: &[Inline], items: &[SourceNode], iscurrent: bool, acc: &mut Accumulator) {
        let mut group = Accumulator::new(iscurrent);
        self.walk_siblings(items, &mut group);
        let group = group.close(self.exclude_local);

        let local_only = group.local_only;
        let url = group.children.first().and_then(|entry| entry.node.url.clone());
        let node = NavNode {
            title: self.renderer.render_text(title),
            url,
            active: group.active,
            children: group.into_children(),
        };

        acc.push(node, local_only, false);
    }
}

/// Convert with the default inline renderer
pub fn convert(root: &SourceNode, exclude_local: bool) -> Vec<NavNode> {
    TocConverter::new(&PlainRenderer, exclude_local).convert(root)
}
