use crate::config::types::Config;
use crate::error::{GcloneError, Result};
use crate::fsutil::{ensure_dir, write_atomic};
use std::path::Path;

/// Load the profile store from `path`.
///
/// A missing file is not an error: it yields an empty configuration.
pub fn load_config(path: &Path) -> Result<Config> {
	let content = match std::fs::read_to_string(path) {
		Ok(content) => content,
		Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "config file not found, using empty profile set");
			return Ok(Config::default());
		}
		Err(source) => {
			return Err(GcloneError::ConfigRead {
				path: path.to_path_buf(),
				source,
			});
		}
	};

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config = toml::from_str(content).map_err(|source| GcloneError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(
		path = %path.display(),
		profiles = config.profiles.len(),
		"loaded configuration"
	);
	Ok(config)
}

/// Render a config as TOML.
pub fn render_config(config: &Config) -> Result<String> {
	toml::to_string_pretty(config).map_err(|source| GcloneError::ConfigSerialize { source })
}

/// Save the profile store to `path`, creating its directory if needed.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
	if let Some(dir) = path.parent() {
		ensure_dir(dir, 0o755)?;
	}
	let content = render_config(config)?;
	write_atomic(path, &content)
}
