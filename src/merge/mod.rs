//! Merging upstream theme assets into this repository
//!
//! Upstream files are checked out into a temporary worktree, the paths in
//! [`MERGE_EXCLUDE_PATTERNS`] are deleted there and committed, and that commit
//! is merged into the current branch. Each such commit also lists the previous
//! one as a parent so that the deletions don't conflict on later merges.

mod git;

use std::path::Path;

use log::info;

use crate::config::default_source_ref;
use crate::utils::error::ThemeError;

pub use git::{GitRunner, SystemGit};

/// Upstream paths that never land in this repository
pub const MERGE_EXCLUDE_PATTERNS: &[&str] = &[
    // upstream build configuration
    ".gitignore",
    ".gitattributes",
    ".github",
    ".browserslistrc",
    ".dockerignore",
    "requirements.txt",
    "setup.py",
    "Dockerfile",
    "MANIFEST.in",
    // generated
    "material",
    // upstream generator integration
    "src/*.py",
    "src/mkdocs_theme.yml",
    "src/404.html",
    "mkdocs.yml",
    // unused
    "typings/lunr",
    "src/assets/javascripts/browser/worker",
    "src/assets/javascripts/integrations/search/worker",
    // upstream's own documentation
    "src/overrides",
    "src/assets/images/favicon.png",
    "src/.icons/logo.*",
    "docs",
    "LICENSE",
    "CHANGELOG",
    "package-lock.json",
    "*.md",
];

const MERGE_MESSAGE: &str = "Merge changes from mkdocs-material";

const FIRST_MERGE_MESSAGE: &str = "Pull in pristine files from mkdocs-material

This just pulls in the unmodified files from mkdocs-material to serve
as a merge base.  Subsequent commits will make necessary modifications
to these files, and integrate them into the sphinx theme.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Upstream ref to pull files from
    pub source_ref: String,
    /// Leave the temporary worktree on disk
    pub keep_temp: bool,
    /// Stop after creating the filtered commit
    pub dry_run: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            source_ref: default_source_ref(),
            keep_temp: false,
            dry_run: false,
        }
    }
}

/// What a merge run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Commit holding the filtered upstream files
    pub parent_commit: String,
    /// Filtered commit from the previous run, if any
    pub previous_merge: Option<String>,
    /// Whether the filtered commit was merged into the current branch
    pub merged: bool,
}

/// Find the filtered commit created by the previous run
pub fn previous_merge_commit<G: GitRunner + ?Sized>(
    git: &G,
    source_ref: &str,
) -> Result<Option<String>, ThemeError> {
    let branch_point = match git.run(&["merge-base", "HEAD", source_ref], None) {
        Ok(out) => out.trim().to_string(),
        Err(_) => {
            info!("No previous merge found");
            return Ok(None);
        }
    };

    let exclude = format!("^{}", branch_point);
    let history = git.run(&["rev-list", "HEAD", &exclude, "--ancestry-path", "--reverse"], None)?;
    match history.lines().next() {
        Some(commit) => Ok(Some(commit.trim().to_string())),
        None => Err(ThemeError::Git(format!(
            "HEAD has no commits after its merge base with {}",
            source_ref
        ))),
    }
}

/// Pull the non-excluded upstream files and merge them into the current branch
pub fn merge_upstream<G: GitRunner + ?Sized>(git: &G, options: &MergeOptions) -> Result<MergeOutcome, ThemeError> {
    let previous_merge = previous_merge_commit(git, &options.source_ref)?;

    let workdir = tempfile::Builder::new()
        .prefix("material-merge")
        .keep(options.keep_temp)
        .tempdir()?;
    let worktree = workdir.path();

    info!("Checking out {} -> {}", options.source_ref, worktree.display());
    let worktree_arg = worktree.to_string_lossy().into_owned();
    git.run(&["worktree", "add", "--detach", &worktree_arg, &options.source_ref], None)?;

    let result = filtered_commit(git, worktree, &options.source_ref, previous_merge.as_deref()).and_then(
        |parent_commit| {
            if !options.dry_run {
                merge_parent(git, &parent_commit, previous_merge.is_none())?;
            }
            Ok(MergeOutcome {
                parent_commit,
                previous_merge: previous_merge.clone(),
                merged: !options.dry_run,
            })
        },
    );

    let removed = if options.keep_temp {
        Ok(String::new())
    } else {
        git.run(&["worktree", "remove", "--force", &worktree_arg], None)
    };

    // A failed merge step is reported ahead of a failed cleanup
    let outcome = result?;
    removed?;
    Ok(outcome)
}

fn filtered_commit<G: GitRunner + ?Sized>(
    git: &G,
    worktree: &Path,
    source_ref: &str,
    previous_merge: Option<&str>,
) -> Result<String, ThemeError> {
    if let Some(prev) = previous_merge {
        info!("Adding merge parent");
        git.run(&["merge", "-s", "ours", "--no-ff", "--no-commit", prev], Some(worktree))?;
    }

    info!("Removing excluded files");
    let mut rm = vec!["rm", "--quiet", "-r"];
    rm.extend_from_slice(MERGE_EXCLUDE_PATTERNS);
    git.run(&rm, Some(worktree))?;

    info!("Performing merge");
    info!("You will have to commit manually once any conflicts are resolved");
    let message = format!("Pull non-excluded files from {}", source_ref);
    git.run(&["commit", "-m", &message], Some(worktree))?;

    Ok(git.run(&["rev-parse", "HEAD"], Some(worktree))?.trim().to_string())
}

fn merge_parent<G: GitRunner + ?Sized>(git: &G, parent_commit: &str, first_merge: bool) -> Result<(), ThemeError> {
    let message = if first_merge { FIRST_MERGE_MESSAGE } else { MERGE_MESSAGE };

    let mut args = vec!["merge", "--no-ff", "--no-verify", "-m", message, parent_commit];
    if first_merge {
        args.push("--allow-unrelated-histories");
    } else {
        args.extend_from_slice(&["--no-commit", "--log"]);
    }

    git.run(&args, None)?;
    Ok(())
}
