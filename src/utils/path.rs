/// Link suffix appended to page names in the HTML output
pub const LINK_SUFFIX: &str = ".html";

/// Relative prefix from a page back to the output root.
///
/// Top-level pages get `"."`, nested pages one `".."` per directory level.
pub fn base_url_for(pagename: &str) -> String {
    let depth = pagename.matches('/').count();
    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Target URI of a page relative to the output root
pub fn target_uri(pagename: &str) -> String {
    format!("{}{}", pagename, LINK_SUFFIX)
}

/// Relative URI from one output URI to another.
///
/// Linking a page to itself yields an empty string.
pub fn relative_uri(base: &str, to: &str) -> String {
    if to.starts_with('/') {
        return to.to_string();
    }

    let mut b: Vec<&str> = strip_fragment(base).split('/').collect();
    let mut t: Vec<&str> = strip_fragment(to).split('/').collect();

    // Drop the shared directory prefix
    while b.len() > 1 && t.len() > 1 && b[0] == t[0] {
        b.remove(0);
        t.remove(0);
    }

    if b == t {
        return String::new();
    }
    if b.len() == 1 && t == [""] {
        return "./".to_string();
    }

    format!("{}{}", "../".repeat(b.len() - 1), t.join("/"))
}

/// Link from the page `from` to the page `to`, both given as page names.
///
/// A page linking to itself gets `"#"`.
pub fn pathto(from: &str, to: &str) -> String {
    let uri = relative_uri(&target_uri(from), &target_uri(to));
    if uri.is_empty() {
        "#".to_string()
    } else {
        uri
    }
}

/// Returns the url with any fragment identifier removed
pub fn strip_fragment(url: &str) -> &str {
    match url.find('#') {
        Some(pos) => &url[..pos],
        None => url,
    }
}

/// Whether a URL points at a location on the current page only
pub fn is_fragment_only(url: &str) -> bool {
    strip_fragment(url).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_for() {
        assert_eq!(base_url_for("index"), ".");
        assert_eq!(base_url_for("guide/install"), "..");
        assert_eq!(base_url_for("a/b/c"), "../..");
    }

    #[test]
    fn test_pathto() {
        assert_eq!(pathto("guide/install", "index"), "../index.html");
        assert_eq!(pathto("about", "index"), "index.html");
        assert_eq!(pathto("index", "index"), "#");
        assert_eq!(relative_uri("index.html", "index.html"), "");
        assert_eq!(relative_uri("f/index.html", "f/"), "./");
        assert_eq!(pathto("guide/a", "guide/b"), "b.html");
    }

    #[test]
    fn test_fragments() {
        assert_eq!(strip_fragment("page2.html#x"), "page2.html");
        assert_eq!(strip_fragment("page2.html"), "page2.html");
        assert!(is_fragment_only("#a"));
        assert!(is_fragment_only("#"));
        assert!(!is_fragment_only("page2.html#x"));
    }
}
