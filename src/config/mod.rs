//! Profile store for gclone.
//!
//! This module handles:
//! - TOML config file loading and saving
//! - Default per-user paths for the store and the SSH config files

pub mod paths;
pub mod store;
pub mod types;

pub use paths::{
	SSH_INCLUDE_PATH, expand_tilde, gclone_dir, primary_ssh_config_path,
	secondary_ssh_config_path, user_config_path,
};
pub use store::{load_config, parse_config_str, render_config, save_config};
pub use types::{Config, Profile};
