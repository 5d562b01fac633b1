use std::path::PathBuf;

/// Library-level structured errors for gclone.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum GcloneError {
	#[error("Unsupported git URL format: {url} (only SSH URLs like git@host:owner/repo.git are supported)")]
	UnsupportedUrlFormat { url: String },

	#[error("Profile '{name}' not found")]
	ProfileNotFound { name: String },

	#[error("Profile '{name}' does not have an SSH host configured")]
	MissingSshHost { name: String },

	#[error("No profiles found. Run 'gclone init' to create default profiles.")]
	NoProfiles,

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to encode configuration")]
	ConfigSerialize {
		#[source]
		source: toml::ser::Error,
	},

	#[error("Failed to read {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create directory: {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Command not found: {command}")]
	CommandNotFound { command: String },

	#[error("Command execution failed: {command}")]
	CommandFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Command returned non-zero exit code: {command} (exit code: {exit_code})")]
	CommandNonZeroExit { command: String, exit_code: i32 },

	#[error("Repository path does not exist: {path}")]
	RepositoryMissing { path: PathBuf },

	#[error("Prompt failed")]
	Prompt {
		#[source]
		source: dialoguer::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using GcloneError.
pub type Result<T> = std::result::Result<T, GcloneError>;
