use serde_json::{json, Value};

/// Default global toc depth (-1 means unlimited)
pub fn default_globaltoc_depth() -> i64 {
    -1
}

/// Collapse non-current branches of the global toc by default
pub fn default_globaltoc_collapse() -> bool {
    true
}

/// Include hidden toctrees in the global toc by default
pub fn default_globaltoc_includehidden() -> bool {
    true
}

/// Default body and code fonts
pub fn default_font_text() -> String {
    "Roboto".to_string()
}

pub fn default_font_code() -> String {
    "Roboto Mono".to_string()
}

/// Plugins enabled in the theme by default
pub fn default_plugins() -> Value {
    json!({ "search": {} })
}

/// Upstream ref merged by `merge-upstream` when none is given
pub fn default_source_ref() -> String {
    "mkdocs-material/master".to_string()
}

/// Theme option document every user configuration is merged over
pub fn default_theme_options() -> Value {
    json!({
        "features": [],
        "font": {
            "text": default_font_text(),
            "code": default_font_code(),
        },
        "plugins": default_plugins(),
        "globaltoc_depth": default_globaltoc_depth(),
        "globaltoc_collapse": default_globaltoc_collapse(),
        "globaltoc_includehidden": default_globaltoc_includehidden(),
    })
}
