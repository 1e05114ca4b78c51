use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::config::ThemeOptions;
use crate::context::nav::{global_navigation, local_toc};
use crate::toc::{InlineRenderer, SourceNode};
use crate::utils::path::base_url_for;
use crate::utils::text::escaped_plain_title;

fn default_master_doc() -> String {
    "index".to_string()
}

/// Neighbouring page link supplied by the documentation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    /// Title as HTML
    pub title: String,
    pub link: String,
}

/// Per-page metadata from the document's field list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub tocdepth: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageMeta {
    /// `tocdepth: 0` hides the page's own table of contents
    pub fn hides_toc(&self) -> bool {
        match &self.tocdepth {
            Some(Value::Number(n)) => n.as_i64() == Some(0),
            Some(Value::String(s)) => s.trim() == "0",
            _ => false,
        }
    }
}

/// Everything the documentation engine hands over for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSource {
    /// Page name without suffix, `/`-separated
    pub pagename: String,

    #[serde(default = "default_master_doc")]
    pub master_doc: String,

    /// Page title as HTML
    #[serde(default)]
    pub title: Option<String>,

    /// Rendered page body
    #[serde(default)]
    pub body: Option<String>,

    /// Title of the whole documentation set
    #[serde(default)]
    pub docstitle: Option<String>,

    #[serde(default)]
    pub last_updated: Option<String>,

    #[serde(default)]
    pub meta: Option<PageMeta>,

    #[serde(default)]
    pub next: Option<PageLink>,

    #[serde(default)]
    pub prev: Option<PageLink>,

    /// Site-wide toc tree for this page
    #[serde(default)]
    pub global_toc: Option<SourceNode>,

    /// Section tree of this page
    #[serde(default)]
    pub local_toc: Option<SourceNode>,
}

impl PageSource {
    pub fn new(pagename: &str) -> Self {
        Self {
            pagename: pagename.to_string(),
            master_doc: default_master_doc(),
            title: None,
            body: None,
            docstitle: None,
            last_updated: None,
            meta: None,
            next: None,
            prev: None,
            global_toc: None,
            local_toc: None,
        }
    }

    pub fn is_homepage(&self) -> bool {
        self.pagename == self.master_doc
    }
}

fn page_link(link: &PageLink) -> Value {
    json!({
        "title": escaped_plain_title(&link.title),
        "url": link.link,
    })
}

fn version_config(options: &ThemeOptions) -> Value {
    if !options.version_dropdown {
        return Value::Null;
    }
    json!({
        "provider": "mike",
        "staticVersions": options.version_info,
        "versionPath": options.version_json,
    })
}

/// Build the template context for one page
pub fn build_page_context<R: InlineRenderer + ?Sized>(
    source: &PageSource,
    options: &ThemeOptions,
    renderer: &R,
) -> Value {
    let nav = global_navigation(
        source.global_toc.as_ref(),
        &source.pagename,
        &source.master_doc,
        options,
        renderer,
    );
    let toc = local_toc(source.local_toc.as_ref(), renderer);

    let mut hide = Vec::new();
    if source.meta.as_ref().map_or(false, PageMeta::hides_toc) {
        hide.push("toc");
    }

    let mut page = json!({
        "title": escaped_plain_title(source.title.as_deref().unwrap_or_default()),
        "is_homepage": source.is_homepage(),
        "toc": toc,
        "meta": {
            "hide": hide,
            "revision_date": source.last_updated,
        },
        "content": source.body,
    });
    if let Some(next) = &source.next {
        page["next_page"] = page_link(next);
    }
    if let Some(prev) = &source.prev {
        page["previous_page"] = page_link(prev);
    }

    json!({
        "nav": nav,
        "base_url": base_url_for(&source.pagename),
        "page": page,
        "config": {
            "theme": options.to_value(),
            "site_url": options.site_url,
            "site_name": source.docstitle,
            "repo_url": options.repo_url,
            "repo_name": options.repo_name,
            "extra": {
                "version": version_config(options),
                "social": options.social,
                "disqus": options.disqus,
                "manifest": options.pwa_manifest,
            },
            "plugins": options.plugins,
            "google_analytics": options.google_analytics,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::PlainRenderer;

    fn sample_page() -> PageSource {
        let mut page = PageSource::new("guide/install");
        page.title = Some("<em>Install</em> &amp; run".into());
        page.body = Some("<p>Body</p>".into());
        page.docstitle = Some("Project Docs".into());
        page.next = Some(PageLink {
            title: "<code>Usage</code>".into(),
            link: "usage.html".into(),
        });
        page.local_toc = Some(SourceNode::bullet_list(vec![SourceNode::entry(
            "Install",
            "#",
            Some(SourceNode::bullet_list(vec![SourceNode::entry("Linux", "#linux", None)])),
        )]));
        page.global_toc = Some(SourceNode::bullet_list(vec![
            SourceNode::entry("Install", "#", None).current(),
            SourceNode::entry("Usage", "usage.html", None),
        ]));
        page
    }

    #[test]
    fn test_page_context() {
        let ctx = build_page_context(&sample_page(), &ThemeOptions::default(), &PlainRenderer);

        assert_eq!(ctx["base_url"], "..");
        assert_eq!(ctx["page"]["title"], "Install &amp; run");
        assert_eq!(ctx["page"]["is_homepage"], false);
        assert_eq!(ctx["page"]["content"], "<p>Body</p>");
        assert_eq!(ctx["page"]["toc"][0]["title"], "Linux");
        assert_eq!(ctx["page"]["toc"][0]["url"], "#linux");
        assert_eq!(ctx["page"]["meta"]["hide"], json!([]));
        assert_eq!(ctx["page"]["next_page"]["title"], "Usage");
        assert_eq!(ctx["page"]["next_page"]["url"], "usage.html");
        assert!(ctx["page"].get("previous_page").is_none());

        assert_eq!(ctx["nav"]["homepage"]["url"], "../index.html");
        assert_eq!(ctx["nav"]["items"][0]["title"], "Install");
        assert_eq!(ctx["nav"]["items"][0]["active"], true);
        assert_eq!(ctx["nav"]["items"][1]["url"], "usage.html");

        assert_eq!(ctx["config"]["site_name"], "Project Docs");
        assert_eq!(ctx["config"]["extra"]["version"], Value::Null);
        assert_eq!(ctx["config"]["plugins"], json!({ "search": {} }));
        assert_eq!(ctx["config"]["theme"]["font"]["text"], "Roboto");
    }

    #[test]
    fn test_tocdepth_zero_hides_toc() {
        let mut page = sample_page();
        page.meta = Some(PageMeta {
            tocdepth: Some(json!(0)),
            extra: Map::new(),
        });
        let ctx = build_page_context(&page, &ThemeOptions::default(), &PlainRenderer);
        assert_eq!(ctx["page"]["meta"]["hide"], json!(["toc"]));

        page.meta = Some(PageMeta {
            tocdepth: Some(json!("2")),
            extra: Map::new(),
        });
        let ctx = build_page_context(&page, &ThemeOptions::default(), &PlainRenderer);
        assert_eq!(ctx["page"]["meta"]["hide"], json!([]));
    }

    #[test]
    fn test_version_dropdown() {
        let options = ThemeOptions {
            version_dropdown: true,
            version_json: Some("../versions.json".into()),
            ..ThemeOptions::default()
        };
        let ctx = build_page_context(&PageSource::new("index"), &options, &PlainRenderer);

        assert_eq!(
            ctx["config"]["extra"]["version"],
            json!({ "provider": "mike", "staticVersions": null, "versionPath": "../versions.json" })
        );
        assert_eq!(ctx["page"]["is_homepage"], true);
        assert_eq!(ctx["base_url"], ".");
        assert_eq!(ctx["nav"]["homepage"]["url"], "#");
        assert_eq!(ctx["nav"]["items"], json!([]));
    }

    #[test]
    fn test_page_source_from_json() {
        let page: PageSource = serde_json::from_str(
            r#"{"pagename": "about", "prev": {"title": "Home", "link": "index.html"}, "meta": {"tocdepth": 0, "author": "x"}}"#,
        )
        .unwrap();

        assert_eq!(page.master_doc, "index");
        assert!(page.meta.as_ref().unwrap().hides_toc());
        assert_eq!(page.meta.as_ref().unwrap().extra["author"], "x");

        let ctx = build_page_context(&page, &ThemeOptions::default(), &PlainRenderer);
        assert_eq!(ctx["page"]["previous_page"]["url"], "index.html");
    }
}
