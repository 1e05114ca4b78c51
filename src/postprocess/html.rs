use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, QualName};
use lazy_static::lazy_static;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use regex::Regex;

use crate::utils::error::ThemeError;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is not HTML-escaped
const RAW_TEXT_ELEMENTS: [&str; 6] = ["script", "style", "xmp", "iframe", "noembed", "noframes"];

/// Elements whose whitespace is significant
const PREFORMATTED_ELEMENTS: [&str; 2] = ["pre", "textarea"];

/// How rendered pages are rewritten after the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlMode {
    Minify,
    Prettify,
}

impl HtmlMode {
    /// Present participle used in progress messages
    pub fn verb(&self) -> &'static str {
        match self {
            HtmlMode::Minify => "Minifying",
            HtmlMode::Prettify => "Prettifying",
        }
    }

    pub fn apply(&self, html: &str) -> Result<String, ThemeError> {
        match self {
            HtmlMode::Minify => minify_html(html),
            HtmlMode::Prettify => prettify_html(html),
        }
    }
}

fn parse_html(html: &str) -> Result<RcDom, ThemeError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;
    Ok(dom)
}

fn is_verbatim(tag: &str) -> bool {
    PREFORMATTED_ELEMENTS.contains(&tag) || RAW_TEXT_ELEMENTS.contains(&tag)
}

// `<!--[if IE]>...<![endif]-->` is read by old browsers
fn is_conditional_comment(contents: &str) -> bool {
    contents.starts_with("[if")
}

fn qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

fn start_tag(name: &QualName, attrs: &[Attribute]) -> String {
    let mut tag = format!("<{}", name.local);
    for attr in attrs {
        let value: &str = &attr.value;
        tag.push_str(&format!(
            " {}=\"{}\"",
            qualified_name(&attr.name),
            html_escape::encode_double_quoted_attribute(value)
        ));
    }
    tag.push('>');
    tag
}

/// Node whose children are serialized: the content fragment for `<template>`
fn content_root(handle: &Handle) -> Handle {
    if let NodeData::Element { template_contents, .. } = &handle.data {
        if let Some(contents) = template_contents.borrow().as_ref() {
            return contents.clone();
        }
    }
    handle.clone()
}

#[derive(Debug, Clone, Copy)]
struct Compact {
    /// Collapse whitespace runs and drop comments
    collapse: bool,
    /// Text is emitted unescaped
    raw: bool,
}

const VERBATIM: Compact = Compact {
    collapse: false,
    raw: false,
};

fn write_compact(handle: &Handle, out: &mut String, mode: Compact) {
    match &handle.data {
        NodeData::Document => write_children(handle, out, mode),
        NodeData::Doctype { name, .. } => {
            let name: &str = name;
            out.push_str(&format!("<!DOCTYPE {}>", name));
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let text: &str = &text;
            if mode.raw {
                out.push_str(text);
            } else if mode.collapse {
                out.push_str(&html_escape::encode_text(&WHITESPACE_REGEX.replace_all(text, " ")));
            } else {
                out.push_str(&html_escape::encode_text(text));
            }
        }
        NodeData::Comment { contents } => {
            let contents: &str = contents;
            if !mode.collapse || is_conditional_comment(contents) {
                out.push_str(&format!("<!--{}-->", contents));
            }
        }
        NodeData::Element { name, attrs, .. } => {
            out.push_str(&start_tag(name, &attrs.borrow()));
            let tag: &str = &name.local;
            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            let inner = Compact {
                collapse: mode.collapse && !is_verbatim(tag),
                raw: RAW_TEXT_ELEMENTS.contains(&tag),
            };
            write_children(&content_root(handle), out, inner);
            out.push_str(&format!("</{}>", tag));
        }
        NodeData::ProcessingInstruction { .. } => {}
    }
}

fn write_children(handle: &Handle, out: &mut String, mode: Compact) {
    for child in handle.children.borrow().iter() {
        write_compact(child, out, mode);
    }
}

fn write_pretty(handle: &Handle, depth: usize, lines: &mut Vec<String>) {
    let indent = " ".repeat(depth);
    match &handle.data {
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                write_pretty(child, depth, lines);
            }
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(format!("{}{}", indent, html_escape::encode_text(trimmed)));
            }
        }
        NodeData::Element { name, attrs, .. } => {
            let tag: &str = &name.local;
            if VOID_ELEMENTS.contains(&tag) || is_verbatim(tag) {
                let mut line = indent;
                write_compact(handle, &mut line, VERBATIM);
                lines.push(line);
                return;
            }

            lines.push(format!("{}{}", indent, start_tag(name, &attrs.borrow())));
            let root = content_root(handle);
            for child in root.children.borrow().iter() {
                write_pretty(child, depth + 1, lines);
            }
            lines.push(format!("{}</{}>", indent, tag));
        }
        NodeData::Doctype { .. } | NodeData::Comment { .. } => {
            let mut line = indent;
            write_compact(handle, &mut line, VERBATIM);
            lines.push(line);
        }
        NodeData::ProcessingInstruction { .. } => {}
    }
}

/// Drop comments and collapse whitespace outside of preformatted and raw-text elements
pub fn minify_html(html: &str) -> Result<String, ThemeError> {
    let dom = parse_html(html)?;
    let mut out = String::with_capacity(html.len());
    write_compact(
        &dom.document,
        &mut out,
        Compact {
            collapse: true,
            raw: false,
        },
    );
    Ok(out)
}

/// One tag or text run per line, indented one space per nesting level
pub fn prettify_html(html: &str) -> Result<String, ThemeError> {
    let dom = parse_html(html)?;
    let mut lines = Vec::new();
    write_pretty(&dom.document, 0, &mut lines);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
