use crate::error::{GcloneError, Result};
use std::path::PathBuf;

/// Directory holding gclone's own files, relative to the home directory.
pub const GCLONE_DIR: &str = ".gclone";

/// The secondary SSH config as written in the primary config's `Include` line.
pub const SSH_INCLUDE_PATH: &str = "~/.gclone/ssh_config";

fn home_dir() -> Result<PathBuf> {
	dirs::home_dir().ok_or(GcloneError::HomeDirectoryNotFound)
}

/// `~/.gclone`
pub fn gclone_dir() -> Result<PathBuf> {
	Ok(home_dir()?.join(GCLONE_DIR))
}

/// Get the path to the profile store (`~/.gclone/config.toml`).
pub fn user_config_path() -> Result<PathBuf> {
	Ok(gclone_dir()?.join("config.toml"))
}

/// `~/.gclone/ssh_config`
pub fn secondary_ssh_config_path() -> Result<PathBuf> {
	Ok(gclone_dir()?.join("ssh_config"))
}

/// `~/.ssh/config`
pub fn primary_ssh_config_path() -> Result<PathBuf> {
	Ok(home_dir()?.join(".ssh").join("config"))
}

/// Expand a leading `~/` against the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
	match (path.strip_prefix("~/"), dirs::home_dir()) {
		(Some(rest), Some(home)) => home.join(rest),
		_ => PathBuf::from(path),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_config_path() {
		let path = user_config_path().unwrap();
		assert!(path.ends_with(".gclone/config.toml"));
	}

	#[test]
	fn test_ssh_paths() {
		assert!(primary_ssh_config_path().unwrap().ends_with(".ssh/config"));
		assert!(
			secondary_ssh_config_path()
				.unwrap()
				.ends_with(".gclone/ssh_config")
		);
	}

	#[test]
	fn test_expand_tilde() {
		assert_eq!(expand_tilde("/abs/key"), PathBuf::from("/abs/key"));
		if let Some(home) = dirs::home_dir() {
			assert_eq!(expand_tilde("~/.ssh/id"), home.join(".ssh/id"));
		}
	}
}
