//! External command execution.
//!
//! Every external collaborator (vsce, git, ImageMagick, potrace) is invoked
//! through the [`CommandRunner`] trait so command modules stay decoupled from
//! the real process spawner and tests can substitute a mock.

use log::*;
use std::path::Path;
use std::process::Command;

use crate::{error::GuardianError, result::Result};

/// Captured output of a finished external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Abstraction over blocking external command invocation.
///
/// `run` returns `Ok` only for a zero exit status; a non-zero exit or a
/// missing program surfaces as a typed error. There are no timeouts: callers
/// wait for completion, matching the synchronous pipeline model.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandOutput>;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> Result<CommandOutput> {
        info!("  Running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    GuardianError::ToolNotFound(program.to_string())
                } else {
                    GuardianError::command_failed(program, -1, err.to_string())
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            error!("  ✗ Command failed with exit code {code}");
            error!("  stderr: {stderr}");
            return Err(
                GuardianError::command_failed(program, code, stderr).into()
            );
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// Check whether an external tool is resolvable on PATH.
pub fn tool_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Convenience for building the owned argument vector `run` expects.
pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
