use log::{debug, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config;
use crate::hooks::{Hook, HookContext, ThemeHooks};
use crate::utils::fs::list_files_with_extension;
use crate::utils::BoxResult;

/// Page name of a rendered file: its path below `outdir`, `/`-separated, without suffix
fn pagename_for(outdir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(outdir).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Handle the finish command
pub fn handle_finish_command(
    outdir: &Path,
    source: &Path,
    config_files: Option<&Vec<PathBuf>>,
    failed: bool,
) -> BoxResult<()> {
    let options = config::load_theme_options(source, config_files.cloned())?;
    let hooks = ThemeHooks::new(options, outdir);

    let pages = list_files_with_extension(outdir, "html");
    info!("Registering {} pages from {}", pages.len(), outdir.display());

    // Names are computed in parallel; registration keeps the sorted page order
    let pagenames: Vec<String> = pages
        .par_iter()
        .filter_map(|file| pagename_for(outdir, file))
        .collect();
    for pagename in &pagenames {
        debug!("Registering {}", pagename);
        hooks.add_html_link(pagename)?;
    }
    debug!(
        "{} sitemap links and {} pages to reformat queued",
        hooks.pending_links(),
        hooks.pending_pages()
    );

    hooks.dispatch(Hook::BuildFinished, &mut HookContext::finished(failed))?;
    info!("Post-build passes finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagename_for() {
        let outdir = Path::new("/site/_build");
        assert_eq!(
            pagename_for(outdir, Path::new("/site/_build/guide/install.html")).as_deref(),
            Some("guide/install")
        );
        assert_eq!(pagename_for(outdir, Path::new("/site/_build/index.html")).as_deref(), Some("index"));
        assert_eq!(pagename_for(outdir, Path::new("/elsewhere/index.html")), None);
    }

    #[test]
    fn test_finish_writes_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("_build");
        crate::utils::fs::write_file(out.join("index.html"), "<p>home</p>").unwrap();
        crate::utils::fs::write_file(out.join("guide/install.html"), "<p>install</p>").unwrap();
        crate::utils::fs::write_file(dir.path().join("_theme.yml"), "site_url: https://x.org\n").unwrap();

        handle_finish_command(&out, dir.path(), None, false).unwrap();

        let xml = crate::utils::fs::read_file(out.join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://x.org/index.html</loc>"));
        assert!(xml.contains("<loc>https://x.org/guide/install.html</loc>"));
    }

    #[test]
    fn test_finish_sitemap_follows_page_order() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("_build");
        let mut expected = Vec::new();
        for i in 0..40 {
            let name = format!("page{:02}", i);
            crate::utils::fs::write_file(out.join(format!("{}.html", name)), "<p>x</p>").unwrap();
            expected.push(format!("<loc>https://x.org/{}.html</loc>", name));
        }
        crate::utils::fs::write_file(dir.path().join("_theme.yml"), "site_url: https://x.org\n").unwrap();

        handle_finish_command(&out, dir.path(), None, false).unwrap();

        let xml = crate::utils::fs::read_file(out.join("sitemap.xml")).unwrap();
        let locs: Vec<String> = xml
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("<loc>"))
            .map(String::from)
            .collect();
        assert_eq!(locs, expected);
    }
}
