use crate::config::Profile;
use crate::error::{GcloneError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// SSH shorthand remote: `user@host:path`.
static SSH_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?P<user>[^:@]+)@(?P<host>[^:]+):(?P<path>.+)$")
		.expect("SSH shorthand pattern is valid")
});

/// The parts of an SSH shorthand remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshRemote<'a> {
	pub user: &'a str,
	pub host: &'a str,
	pub path: &'a str,
}

impl<'a> SshRemote<'a> {
	/// Split `user@host:path`, or `None` if the URL has another shape.
	pub fn parse(url: &'a str) -> Option<Self> {
		let caps = SSH_SHORTHAND.captures(url)?;
		Some(SshRemote {
			user: caps.name("user")?.as_str(),
			host: caps.name("host")?.as_str(),
			path: caps.name("path")?.as_str(),
		})
	}
}

/// Rewrite the host segment of an SSH remote URL to the profile's SSH host alias.
///
/// Without a profile, or with a profile whose `ssh_host` is empty, the URL is
/// returned unchanged. The user segment is preserved as written.
pub fn transform_url(url: &str, profile: Option<&Profile>) -> Result<String> {
	let Some(ssh_host) = profile.and_then(Profile::ssh_host) else {
		return Ok(url.to_string());
	};

	let remote = SshRemote::parse(url).ok_or_else(|| GcloneError::UnsupportedUrlFormat {
		url: url.to_string(),
	})?;

	Ok(format!("{}@{}:{}", remote.user, ssh_host, remote.path))
}

/// Repository name from the last path segment, without a `.git` suffix.
pub fn repository_name(url: &str) -> Option<String> {
	let path = SshRemote::parse(url).map_or(url, |remote| remote.path);
	let last = path.trim_end_matches('/').rsplit('/').next()?;
	let name = last.strip_suffix(".git").unwrap_or(last);
	(!name.is_empty()).then(|| name.to_string())
}
