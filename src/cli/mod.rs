pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use std::path::PathBuf;

use crate::merge::MergeOptions;
use crate::utils::BoxResult;

/// Run the command-line interface
pub fn run() -> BoxResult<()> {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));

    match cli.command {
        types::Commands::Nav { tree, local } => commands::handle_nav_command(&tree, local),
        types::Commands::Context { page, config } => {
            commands::handle_context_command(&page, &source, config.as_ref())
        }
        types::Commands::Finish { outdir, config, failed } => {
            commands::handle_finish_command(&outdir, &source, config.as_ref(), failed)
        }
        types::Commands::MergeUpstream {
            source_ref,
            keep_temp,
            dry_run,
        } => commands::handle_merge_command(MergeOptions {
            source_ref,
            keep_temp,
            dry_run,
        }),
    }
}
