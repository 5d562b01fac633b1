use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration from `~/.gclone/config.toml`.
///
/// Profiles are kept in a `BTreeMap` so every iteration (matching, display,
/// post-clone settings) walks them in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub profiles: BTreeMap<String, Profile>,
}

/// A named bundle of SSH host alias, URL patterns and post-clone settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Profile {
	/// Display name, used in generated SSH config comments.
	#[serde(default)]
	pub name: String,

	/// Host alias that replaces the real host in remote URLs (e.g. `github.com-work`).
	#[serde(default)]
	pub ssh_host: String,

	/// Plain substrings tested against the normalized remote URL.
	#[serde(default)]
	pub url_patterns: Vec<String>,

	/// Key/value pairs applied with `git config --local` after cloning.
	#[serde(default)]
	pub git_configs: BTreeMap<String, String>,
}

impl Profile {
	/// Return the SSH host alias, or `None` if it is unset.
	pub fn ssh_host(&self) -> Option<&str> {
		let host = self.ssh_host.trim();
		(!host.is_empty()).then_some(host)
	}
}

impl Config {
	/// Look up a profile by key.
	pub fn profile(&self, key: &str) -> crate::error::Result<&Profile> {
		self.profiles
			.get(key)
			.ok_or_else(|| crate::error::GcloneError::ProfileNotFound {
				name: key.to_string(),
			})
	}

	/// Profile keys in enumeration order.
	pub fn profile_keys(&self) -> Vec<&str> {
		self.profiles.keys().map(String::as_str).collect()
	}

	/// The starter configuration written by `gclone init`.
	pub fn sample() -> Self {
		let mut profiles = BTreeMap::new();
		profiles.insert(
			"personal".to_string(),
			sample_profile(
				"Personal",
				"github.com-personal",
				"your-personal-username",
				"Your Name",
				"your.email@example.com",
			),
		);
		profiles.insert(
			"work".to_string(),
			sample_profile(
				"Work",
				"github.com-work",
				"your-work-organization",
				"Your Work Name",
				"your.work.email@example.com",
			),
		);
		Config { profiles }
	}
}

fn sample_profile(name: &str, ssh_host: &str, owner: &str, user: &str, email: &str) -> Profile {
	let mut git_configs = BTreeMap::new();
	git_configs.insert("user.name".to_string(), user.to_string());
	git_configs.insert("user.email".to_string(), email.to_string());

	Profile {
		name: name.to_string(),
		ssh_host: ssh_host.to_string(),
		url_patterns: vec![format!("github.com/{owner}"), format!("github.com:{owner}")],
		git_configs,
	}
}
