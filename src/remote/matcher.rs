use crate::config::Config;

/// Strip the `user@` prefix from an SSH remote so `git@host:path` and a
/// configured `host:path` pattern share one representation.
pub fn normalize_url(url: &str) -> &str {
	match url.split_once('@') {
		Some((user, rest)) if !user.is_empty() && !user.contains(':') && !user.contains('/') => {
			rest
		}
		_ => url,
	}
}

/// Find the profile whose URL patterns match the remote URL.
///
/// Patterns are plain substrings of the normalized URL. Profiles are tried in
/// ascending key order and the first one with any matching pattern wins.
pub fn detect_profile<'a>(url: &str, config: &'a Config) -> Option<&'a str> {
	let normalized = normalize_url(url);

	config
		.profiles
		.iter()
		.find(|(_, profile)| {
			profile
				.url_patterns
				.iter()
				.any(|pattern| !pattern.is_empty() && normalized.contains(pattern.as_str()))
		})
		.map(|(key, _)| key.as_str())
}
