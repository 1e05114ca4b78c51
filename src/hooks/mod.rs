//! Build hooks the theme registers with the documentation engine

use std::path::PathBuf;

use log::{debug, info};
use serde_json::Value;

use crate::config::{validate_reformat_modes, ThemeOptions};
use crate::context::{build_page_context, PageSource};
use crate::postprocess::{minify_css_files, write_sitemap, HtmlMode, PageQueue, SITEMAP_FILE};
use crate::toc::{InlineRenderer, PlainRenderer};
use crate::utils::error::ThemeError;
use crate::utils::fs::rewrite_file;
use crate::utils::path::LINK_SUFFIX;

/// Events the theme listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// A page is about to be rendered
    PageContext,
    /// Every page has been written
    BuildFinished,
}

impl Hook {
    /// Get the name of the hook
    pub fn name(&self) -> &'static str {
        match self {
            Hook::PageContext => "html-page-context",
            Hook::BuildFinished => "build-finished",
        }
    }
}

/// Data passed to and returned from a hook
#[derive(Debug, Default)]
pub struct HookContext<'a> {
    /// Page being rendered, for `PageContext`
    pub page: Option<&'a PageSource>,
    /// Whether the build failed, for `BuildFinished`
    pub failed: bool,
    /// Template context produced by `PageContext`
    pub output: Option<Value>,
}

impl<'a> HookContext<'a> {
    pub fn for_page(page: &'a PageSource) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn finished(failed: bool) -> Self {
        Self {
            failed,
            ..Self::default()
        }
    }
}

/// Per-build theme state shared by page workers
pub struct ThemeHooks<R: InlineRenderer = PlainRenderer> {
    options: ThemeOptions,
    outdir: PathBuf,
    renderer: R,
    sitemap_links: PageQueue<String>,
    site_pages: PageQueue<PathBuf>,
}

impl ThemeHooks<PlainRenderer> {
    pub fn new(options: ThemeOptions, outdir: impl Into<PathBuf>) -> Self {
        Self::with_renderer(options, outdir, PlainRenderer)
    }
}

impl<R: InlineRenderer> ThemeHooks<R> {
    pub fn with_renderer(options: ThemeOptions, outdir: impl Into<PathBuf>, renderer: R) -> Self {
        Self {
            options,
            outdir: outdir.into(),
            renderer,
            sitemap_links: PageQueue::new(),
            site_pages: PageQueue::new(),
        }
    }

    /// Links queued for the sitemap so far
    pub fn pending_links(&self) -> usize {
        self.sitemap_links.len()
    }

    /// Pages queued for reformatting so far
    pub fn pending_pages(&self) -> usize {
        self.site_pages.len()
    }

    /// Run every handler registered for `hook`, in registration order
    pub fn dispatch(&self, hook: Hook, ctx: &mut HookContext<'_>) -> Result<(), ThemeError> {
        debug!("Running hook {}", hook.name());
        match hook {
            Hook::PageContext => {
                let page = ctx.page.ok_or_else(|| {
                    ThemeError::Generic(format!("Hook {} requires a page", hook.name()))
                })?;
                ctx.output = Some(self.html_page_context(page)?);
                Ok(())
            }
            Hook::BuildFinished => self.build_finished(ctx.failed),
        }
    }

    /// Build the template context for a page and queue it for the post-build passes
    pub fn html_page_context(&self, page: &PageSource) -> Result<Value, ThemeError> {
        let context = build_page_context(page, &self.options, &self.renderer);
        self.add_html_link(&page.pagename)?;
        Ok(context)
    }

    /// Queue a rendered page for the sitemap and, if enabled, for reformatting
    pub fn add_html_link(&self, pagename: &str) -> Result<(), ThemeError> {
        if let Some(root) = self.options.site_root() {
            self.sitemap_links.push(format!("{}{}{}", root, pagename, LINK_SUFFIX));
        }

        validate_reformat_modes(&self.options)?;
        if self.options.reformats_html() {
            self.site_pages.push(self.outdir.join(format!("{}.html", pagename)));
        }
        Ok(())
    }

    /// Run the post-build passes
    pub fn build_finished(&self, failed: bool) -> Result<(), ThemeError> {
        self.create_sitemap(failed)?;
        self.reformat_pages(failed)?;
        self.minify_css(failed)?;
        Ok(())
    }

    /// Write `sitemap.xml` from the queued links
    pub fn create_sitemap(&self, failed: bool) -> Result<(), ThemeError> {
        if self.options.site_root().is_none() || failed || self.sitemap_links.is_empty() {
            return Ok(());
        }

        let links = self.sitemap_links.drain();
        info!(
            "Generating sitemap for {} pages in {}",
            links.len(),
            self.outdir.join(SITEMAP_FILE).display()
        );
        write_sitemap(&self.outdir, &links)
    }

    /// Minify or prettify every queued page in place
    pub fn reformat_pages(&self, failed: bool) -> Result<(), ThemeError> {
        if failed || self.site_pages.is_empty() {
            return Ok(());
        }

        let mode = if self.options.html_minify {
            HtmlMode::Minify
        } else {
            HtmlMode::Prettify
        };
        let pages = self.site_pages.drain();
        let total = pages.len();
        info!("{} {} files", mode.verb(), total);

        let mut last: i64 = -1;
        for (i, page) in pages.iter().enumerate() {
            let percent = (100 * i / total) as i64;
            if percent - last >= 1 {
                last = percent;
                debug!("{} files... [{}%] {}", mode.verb().to_lowercase(), percent, page.display());
            }
            rewrite_file(page, |html| mode.apply(html))?;
        }
        Ok(())
    }

    /// Minify every stylesheet in the output directory when `css_minify` is set
    pub fn minify_css(&self, failed: bool) -> Result<(), ThemeError> {
        if failed || !self.options.css_minify {
            return Ok(());
        }
        minify_css_files(&self.outdir)?;
        Ok(())
    }
}
