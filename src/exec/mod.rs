//! Git invocation for gclone.
//!
//! This module handles:
//! - Running external commands behind the `ProcessRunner` seam
//! - Assembling `git clone` arguments
//! - Applying a profile's post-clone settings with `git config --local`

pub mod clone;

pub use clone::{CloneRequest, apply_git_configs, clone_args, clone_repository};

use crate::error::{GcloneError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs an external program to completion.
///
/// Production code uses `SystemRunner`; tests substitute a recorder.
pub trait ProcessRunner {
	/// Run `program` with `args`, in `cwd` if given. Non-zero exit is an error.
	fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<()>;
}

/// Spawns real processes with stdio passed through to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
	fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<()> {
		let command_line = format!("{} {}", program, args.join(" "));
		tracing::debug!(command = %command_line, cwd = ?cwd, "running command");

		let mut cmd = Command::new(program);
		cmd.args(args)
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit());
		if let Some(dir) = cwd {
			cmd.current_dir(dir);
		}

		let status = cmd.status().map_err(|source| {
			if source.kind() == std::io::ErrorKind::NotFound {
				GcloneError::CommandNotFound {
					command: program.to_string(),
				}
			} else {
				GcloneError::CommandFailed {
					command: command_line.clone(),
					source,
				}
			}
		})?;

		if !status.success() {
			return Err(GcloneError::CommandNonZeroExit {
				command: command_line,
				exit_code: status.code().unwrap_or(-1),
			});
		}

		Ok(())
	}
}
