use std::path::Path;
use std::process::Command;

use log::trace;

use crate::utils::error::ThemeError;

/// Runs `git` subcommands
pub trait GitRunner {
    /// Run `git <args>` in `cwd` (or the current directory) and return stdout
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, ThemeError>;
}

/// Invokes the `git` executable on the `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, ThemeError> {
        trace!("git {}", args.join(" "));

        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .map_err(|e| ThemeError::Git(format!("Failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ThemeError::Git(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
