use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "material-theme")]
#[command(about = "Material Design theme support for documentation builds", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for theme option files (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a toc tree to navigation JSON
    Nav {
        /// JSON file holding the toc tree
        #[arg(value_name = "TREE")]
        tree: PathBuf,

        /// Keep entries that point into the current page
        #[arg(long, default_value_t = false)]
        local: bool,
    },

    /// Build the template context for one page
    Context {
        /// JSON file describing the page
        #[arg(value_name = "PAGE")]
        page: PathBuf,

        /// Custom theme option files
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,
    },

    /// Run the post-build passes over an output directory
    Finish {
        /// Output directory of the build
        #[arg(value_name = "DIR")]
        outdir: PathBuf,

        /// Custom theme option files
        #[arg(short, long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// The build failed; skip every pass
        #[arg(long, default_value_t = false)]
        failed: bool,
    },

    /// Merge upstream theme files into the current branch
    MergeUpstream {
        /// Upstream ref to pull files from
        #[arg(long, value_name = "REF", default_value = "mkdocs-material/master")]
        source_ref: String,

        /// Keep the temporary worktree
        #[arg(long, default_value_t = false)]
        keep_temp: bool,

        /// Only print the merge parent
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}
