use serde::Serialize;

use crate::config::ThemeOptions;
use crate::toc::{InlineRenderer, NavNode, SourceNode, TocConverter};
use crate::utils::path::pathto;

/// Link to the documentation root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Homepage {
    pub url: String,
}

/// Site-wide navigation handed to the templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub items: Vec<NavNode>,
    pub homepage: Homepage,
}

/// Trim a global toc tree the way the theme options ask for.
///
/// List items nested deeper than `maxdepth` lose their sub-lists (when
/// `maxdepth > 0`); with `collapse` only items on the path to the current
/// page keep them.
pub fn prune_toctree(node: &SourceNode, maxdepth: i64, collapse: bool) -> SourceNode {
    prune(node, 1, maxdepth, collapse)
}

fn prune(node: &SourceNode, depth: i64, maxdepth: i64, collapse: bool) -> SourceNode {
    match node {
        SourceNode::ListItem { children, iscurrent } => SourceNode::ListItem {
            children: children
                .iter()
                .filter_map(|child| match child {
                    SourceNode::BulletList { iscurrent: list_current, .. } => {
                        let too_deep = maxdepth > 0 && depth >= maxdepth;
                        let collapsed = collapse && !(*iscurrent || *list_current);
                        if too_deep || collapsed {
                            None
                        } else {
                            Some(prune(child, depth + 1, maxdepth, collapse))
                        }
                    }
                    other => Some(prune(other, depth, maxdepth, collapse)),
                })
                .collect(),
            iscurrent: *iscurrent,
        },
        SourceNode::BulletList { children, iscurrent } => SourceNode::BulletList {
            children: prune_all(children, depth, maxdepth, collapse),
            iscurrent: *iscurrent,
        },
        SourceNode::Paragraph { children } => SourceNode::Paragraph {
            children: prune_all(children, depth, maxdepth, collapse),
        },
        SourceNode::CompactParagraph { children } => SourceNode::CompactParagraph {
            children: prune_all(children, depth, maxdepth, collapse),
        },
        other => other.clone(),
    }
}

fn prune_all(nodes: &[SourceNode], depth: i64, maxdepth: i64, collapse: bool) -> Vec<SourceNode> {
    nodes.iter().map(|node| prune(node, depth, maxdepth, collapse)).collect()
}

/// Global navigation for a page
pub fn global_navigation<R: InlineRenderer + ?Sized>(
    toc: Option<&SourceNode>,
    pagename: &str,
    master_doc: &str,
    options: &ThemeOptions,
    renderer: &R,
) -> Navigation {
    let items = toc
        .map(|root| {
            let pruned = prune_toctree(root, options.globaltoc_depth, options.globaltoc_collapse);
            TocConverter::new(renderer, true).convert(&pruned)
        })
        .unwrap_or_default();

    Navigation {
        items,
        homepage: Homepage {
            url: pathto(pagename, master_doc),
        },
    }
}

/// In-page table of contents.
///
/// A page toc normally has a single root entry for the page title; its
/// children are the sections shown.
pub fn local_toc<R: InlineRenderer + ?Sized>(toc: Option<&SourceNode>, renderer: &R) -> Vec<NavNode> {
    let mut entries = toc
        .map(|root| TocConverter::new(renderer, false).convert(root))
        .unwrap_or_default();

    if entries.len() == 1 {
        entries.remove(0).children
    } else {
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::PlainRenderer;

    fn site_toc() -> SourceNode {
        let guide_children = SourceNode::bullet_list(vec![
            SourceNode::entry("Install", "install.html", None),
            SourceNode::entry(
                "Usage",
                "usage.html",
                Some(SourceNode::bullet_list(vec![SourceNode::entry(
                    "Advanced",
                    "advanced.html",
                    None,
                )])),
            ),
        ]);
        SourceNode::compact_paragraph(vec![
            SourceNode::caption("Docs"),
            SourceNode::bullet_list(vec![
                SourceNode::entry("Guide", "guide.html", Some(guide_children)).current(),
                SourceNode::entry(
                    "Reference",
                    "reference.html",
                    Some(SourceNode::bullet_list(vec![SourceNode::entry("API", "api.html", None)])),
                ),
            ]),
        ])
    }

    fn options(depth: i64, collapse: bool) -> ThemeOptions {
        ThemeOptions {
            globaltoc_depth: depth,
            globaltoc_collapse: collapse,
            ..ThemeOptions::default()
        }
    }

    #[test]
    fn test_collapse_keeps_current_branch() {
        let nav = global_navigation(Some(&site_toc()), "guide", "index", &options(-1, true), &PlainRenderer);
        let docs = &nav.items[0];

        assert_eq!(docs.title, "Docs");
        assert!(docs.active);
        assert_eq!(docs.children[0].children.len(), 2);
        assert!(docs.children[0].children[1].children.is_empty());
        assert!(docs.children[1].children.is_empty());
        assert_eq!(nav.homepage.url, "index.html");
    }

    #[test]
    fn test_unlimited_uncollapsed() {
        let nav = global_navigation(Some(&site_toc()), "guide/usage", "index", &options(-1, false), &PlainRenderer);
        let docs = &nav.items[0];

        assert_eq!(docs.children[0].children[1].children[0].title, "Advanced");
        assert_eq!(docs.children[1].children[0].title, "API");
        assert_eq!(nav.homepage.url, "../index.html");
    }

    #[test]
    fn test_maxdepth() {
        let nav = global_navigation(Some(&site_toc()), "index", "index", &options(1, false), &PlainRenderer);
        let docs = &nav.items[0];

        assert_eq!(docs.children.len(), 2);
        assert!(docs.children.iter().all(|entry| entry.children.is_empty()));
        assert_eq!(nav.homepage.url, "#");
    }

    #[test]
    fn test_missing_toc() {
        let nav = global_navigation(None, "index", "index", &ThemeOptions::default(), &PlainRenderer);
        assert!(nav.items.is_empty());
        assert!(local_toc(None, &PlainRenderer).is_empty());
    }

    #[test]
    fn test_local_toc_unwraps_single_root() {
        let toc = SourceNode::bullet_list(vec![SourceNode::entry(
            "Page",
            "#",
            Some(SourceNode::bullet_list(vec![
                SourceNode::entry("Intro", "#intro", None),
                SourceNode::entry("Details", "#details", None),
            ])),
        )]);

        let entries = local_toc(Some(&toc), &PlainRenderer);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Details"]);
    }

    #[test]
    fn test_local_toc_keeps_multiple_roots() {
        let toc = SourceNode::bullet_list(vec![
            SourceNode::entry("One", "#one", None),
            SourceNode::entry("Two", "#two", None),
        ]);
        assert_eq!(local_toc(Some(&toc), &PlainRenderer).len(), 2);
    }
}
