use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap();
    static ref SPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Strip HTML tags and comments, collapsing runs of whitespace
pub fn strip_tags(html: &str) -> String {
    let stripped = TAG_REGEX.replace_all(html, "");
    let unescaped = html_escape::decode_html_entities(&stripped);
    SPACE_REGEX.replace_all(unescaped.trim(), " ").into_owned()
}

/// Plain-text rendition of an HTML title, re-escaped for template output
pub fn escaped_plain_title(html: &str) -> String {
    html_escape::encode_text(&strip_tags(html)).into_owned()
}
