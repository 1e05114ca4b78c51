use log::debug;
use std::path::Path;

use crate::toc::{convert, SourceNode};
use crate::utils::fs::read_file;
use crate::utils::BoxResult;

/// Handle the nav command
pub fn handle_nav_command(tree: &Path, local: bool) -> BoxResult<()> {
    let source = read_file(tree)?;
    let root: SourceNode = serde_json::from_str(&source)?;

    debug!("Converting {} (exclude_local = {})", tree.display(), !local);
    let nav = convert(&root, !local);

    println!("{}", serde_json::to_string_pretty(&nav)?);
    Ok(())
}
