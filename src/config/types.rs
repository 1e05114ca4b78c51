use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::defaults;
use crate::utils::error::ThemeError;

/// Body and code fonts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    #[serde(default = "defaults::default_font_text")]
    pub text: String,

    #[serde(default = "defaults::default_font_code")]
    pub code: String,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            text: defaults::default_font_text(),
            code: defaults::default_font_code(),
        }
    }
}

/// Theme options after merging user configuration over the defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeOptions {
    /// Theme feature flags passed through to the templates
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub font: FontOptions,

    #[serde(default = "defaults::default_plugins")]
    pub plugins: Value,

    /// Maximum global toc depth, -1 for unlimited
    #[serde(default = "defaults::default_globaltoc_depth")]
    pub globaltoc_depth: i64,

    /// Only expand the branch leading to the current page
    #[serde(default = "defaults::default_globaltoc_collapse")]
    pub globaltoc_collapse: bool,

    #[serde(default = "defaults::default_globaltoc_includehidden")]
    pub globaltoc_includehidden: bool,

    /// Public site root; enables sitemap generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,

    #[serde(default)]
    pub html_minify: bool,

    #[serde(default)]
    pub html_prettify: bool,

    #[serde(default)]
    pub css_minify: bool,

    /// Show the version selector
    #[serde(default)]
    pub version_dropdown: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_json: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disqus: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pwa_manifest: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<Value>,

    /// Any other option, handed to the templates untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            font: FontOptions::default(),
            plugins: defaults::default_plugins(),
            globaltoc_depth: defaults::default_globaltoc_depth(),
            globaltoc_collapse: defaults::default_globaltoc_collapse(),
            globaltoc_includehidden: defaults::default_globaltoc_includehidden(),
            site_url: None,
            repo_url: None,
            repo_name: None,
            html_minify: false,
            html_prettify: false,
            css_minify: false,
            version_dropdown: false,
            version_info: None,
            version_json: None,
            social: None,
            disqus: None,
            pwa_manifest: None,
            google_analytics: None,
            extra: Map::new(),
        }
    }
}

impl ThemeOptions {
    /// Build options from a merged option document
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        serde_json::from_value(value).map_err(|e| ThemeError::Config(format!("Invalid theme options: {}", e)))
    }

    /// Merge user options over the defaults
    pub fn from_user(user: &Value) -> Result<Self, ThemeError> {
        Self::from_value(defaults::merge_all([&defaults::default_theme_options(), user]))
    }

    /// Option document as handed to the templates
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Site root with a guaranteed trailing slash, if a site URL is set
    pub fn site_root(&self) -> Option<String> {
        let url = self.site_url.as_deref().filter(|url| !url.is_empty())?;
        if url.ends_with('/') {
            Some(url.to_string())
        } else {
            Some(format!("{}/", url))
        }
    }

    /// Whether rendered pages are rewritten after the build
    pub fn reformats_html(&self) -> bool {
        self.html_minify || self.html_prettify
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = ThemeOptions::default();
        assert_eq!(options.globaltoc_depth, -1);
        assert!(options.globaltoc_collapse);
        assert!(options.globaltoc_includehidden);
        assert_eq!(options.font.text, "Roboto");
        assert_eq!(options.plugins, json!({ "search": {} }));
        assert!(!options.reformats_html());
    }

    #[test]
    fn test_from_user_keeps_unknown_keys() {
        let options = ThemeOptions::from_user(&json!({
            "site_url": "https://docs.example.com",
            "color_primary": "indigo",
            "font": { "code": "Fira Code" },
        }))
        .unwrap();

        assert_eq!(options.font.text, "Roboto");
        assert_eq!(options.font.code, "Fira Code");
        assert_eq!(options.extra["color_primary"], "indigo");
        assert_eq!(options.to_value()["color_primary"], "indigo");
        assert!(options.to_value().get("repo_url").is_none());
    }

    #[test]
    fn test_site_root() {
        let mut options = ThemeOptions::default();
        assert_eq!(options.site_root(), None);

        options.site_url = Some(String::new());
        assert_eq!(options.site_root(), None);

        options.site_url = Some("https://docs.example.com".into());
        assert_eq!(options.site_root().as_deref(), Some("https://docs.example.com/"));

        options.site_url = Some("https://docs.example.com/".into());
        assert_eq!(options.site_root().as_deref(), Some("https://docs.example.com/"));
    }

    #[test]
    fn test_invalid_type_is_config_error() {
        let err = ThemeOptions::from_user(&json!({ "globaltoc_depth": "deep" })).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }
}
