use serde::{Deserialize, Serialize};

/// Inline markup carried by references and captions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Emphasis { children: Vec<Inline> },
    Strong { children: Vec<Inline> },
    Literal { text: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Inline::Literal { text: text.into() }
    }
}

/// Document-outline node as produced by the documentation engine.
///
/// The set of kinds is closed: anything the engine emits inside a toc tree
/// is one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceNode {
    /// Link to a page or an in-page anchor
    Reference {
        #[serde(default)]
        title: Vec<Inline>,
        #[serde(default)]
        refuri: Option<String>,
    },
    /// Label naming the bullet list that follows it
    Caption {
        #[serde(default)]
        title: Vec<Inline>,
    },
    BulletList {
        #[serde(default)]
        children: Vec<SourceNode>,
        #[serde(default)]
        iscurrent: bool,
    },
    ListItem {
        #[serde(default)]
        children: Vec<SourceNode>,
        #[serde(default)]
        iscurrent: bool,
    },
    /// Nested page tree, resolved by the global toc pass instead
    Toctree {
        #[serde(default)]
        children: Vec<SourceNode>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<SourceNode>,
    },
    CompactParagraph {
        #[serde(default)]
        children: Vec<SourceNode>,
    },
}

impl SourceNode {
    /// Reference with a plain-text title
    pub fn reference(title: &str, refuri: &str) -> Self {
        SourceNode::Reference {
            title: vec![Inline::text(title)],
            refuri: Some(refuri.to_string()),
        }
    }

    pub fn caption(title: &str) -> Self {
        SourceNode::Caption {
            title: vec![Inline::text(title)],
        }
    }

    pub fn bullet_list(children: Vec<SourceNode>) -> Self {
        SourceNode::BulletList {
            children,
            iscurrent: false,
        }
    }

    pub fn list_item(children: Vec<SourceNode>) -> Self {
        SourceNode::ListItem {
            children,
            iscurrent: false,
        }
    }

    pub fn compact_paragraph(children: Vec<SourceNode>) -> Self {
        SourceNode::CompactParagraph { children }
    }

    /// List item holding a single link wrapped in a compact paragraph,
    /// optionally followed by a nested list
    pub fn entry(title: &str, refuri: &str, nested: Option<SourceNode>) -> Self {
        let mut children = vec![Self::compact_paragraph(vec![Self::reference(title, refuri)])];
        children.extend(nested);
        Self::list_item(children)
    }

    /// Mark a list or list item as lying on the path to the current page
    pub fn current(mut self) -> Self {
        match &mut self {
            SourceNode::BulletList { iscurrent, .. } | SourceNode::ListItem { iscurrent, .. } => {
                *iscurrent = true;
            }
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dump() {
        let json = r##"{
            "type": "bullet_list",
            "children": [
                {"type": "list_item", "iscurrent": true, "children": [
                    {"type": "compact_paragraph", "children": [
                        {"type": "reference", "refuri": "intro.html",
                         "title": [{"type": "text", "text": "Intro"}]}
                    ]}
                ]}
            ]
        }"##;

        let node: SourceNode = serde_json::from_str(json).unwrap();
        let expected = SourceNode::bullet_list(vec![SourceNode::entry("Intro", "intro.html", None).current()]);
        assert_eq!(node, expected);
    }

    #[test]
    fn test_reference_without_uri() {
        let node: SourceNode = serde_json::from_str(r#"{"type": "reference"}"#).unwrap();
        assert_eq!(
            node,
            SourceNode::Reference {
                title: vec![],
                refuri: None
            }
        );
    }

    #[test]
    fn test_current_ignores_leaves() {
        let node = SourceNode::reference("A", "a.html").current();
        assert_eq!(node, SourceNode::reference("A", "a.html"));
    }
}
