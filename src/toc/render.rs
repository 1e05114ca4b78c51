use crate::toc::node::Inline;

/// Flattens inline markup for output.
///
/// Implementations must be free of side effects; the converter may call them
/// any number of times for the same nodes.
pub trait InlineRenderer {
    /// Plain text with all markup removed
    fn render_text(&self, nodes: &[Inline]) -> String;

    /// HTML fragment
    fn render_html(&self, nodes: &[Inline]) -> String;
}

/// Default renderer for the built-in inline kinds
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl InlineRenderer for PlainRenderer {
    fn render_text(&self, nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Inline::Text { text } | Inline::Literal { text } => out.push_str(text),
                Inline::Emphasis { children } | Inline::Strong { children } => {
                    out.push_str(&self.render_text(children));
                }
            }
        }
        out
    }

    fn render_html(&self, nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                Inline::Text { text } => out.push_str(&html_escape::encode_text(text)),
                Inline::Literal { text } => {
                    out.push_str("<code>");
                    out.push_str(&html_escape::encode_text(text));
                    out.push_str("</code>");
                }
                Inline::Emphasis { children } => {
                    out.push_str("<em>");
                    out.push_str(&self.render_html(children));
                    out.push_str("</em>");
                }
                Inline::Strong { children } => {
                    out.push_str("<strong>");
                    out.push_str(&self.render_html(children));
                    out.push_str("</strong>");
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Inline> {
        vec![
            Inline::text("Using "),
            Inline::literal("a<b>"),
            Inline::Emphasis {
                children: vec![Inline::text(" safely")],
            },
        ]
    }

    #[test]
    fn test_render_text() {
        assert_eq!(PlainRenderer.render_text(&sample()), "Using a<b> safely");
    }

    #[test]
    fn test_render_html() {
        assert_eq!(
            PlainRenderer.render_html(&sample()),
            "Using <code>a&lt;b&gt;</code><em> safely</em>"
        );
    }
}
