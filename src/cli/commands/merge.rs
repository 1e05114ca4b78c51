use log::info;

use crate::merge::{merge_upstream, MergeOptions, SystemGit};
use crate::utils::BoxResult;

/// Handle the merge-upstream command
pub fn handle_merge_command(options: MergeOptions) -> BoxResult<()> {
    let outcome = merge_upstream(&SystemGit, &options)?;

    if options.dry_run {
        println!("{}", outcome.parent_commit);
    } else {
        info!("Merged {} from {}", outcome.parent_commit, options.source_ref);
    }
    Ok(())
}
