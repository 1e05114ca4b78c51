use log::debug;
use std::path::{Path, PathBuf};

use crate::config;
use crate::context::{build_page_context, PageSource};
use crate::toc::PlainRenderer;
use crate::utils::fs::read_file;
use crate::utils::BoxResult;

/// Handle the context command
pub fn handle_context_command(page: &Path, source: &Path, config_files: Option<&Vec<PathBuf>>) -> BoxResult<()> {
    let options = config::load_theme_options(source, config_files.cloned())?;

    let page: PageSource = serde_json::from_str(&read_file(page)?)?;
    debug!("Building context for {}", page.pagename);

    let context = build_page_context(&page, &options, &PlainRenderer);
    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
