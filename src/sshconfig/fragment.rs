/// Suffix of the comment line heading every generated block.
pub const GENERATOR_MARKER: &str = "(added by gclone)";

/// Real host used when a profile does not say otherwise.
pub const DEFAULT_HOSTNAME: &str = "github.com";

/// A generated `Host` block for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	pub display_name: String,
	pub ssh_host: String,
	pub hostname: String,
	pub identity_file: String,
}

impl Fragment {
	pub fn render(&self) -> String {
		format!(
			"# {} profile {}\nHost {}\n  Hostname {}\n  AddKeysToAgent yes\n  UseKeychain yes\n  IdentityFile {}\n",
			self.display_name, GENERATOR_MARKER, self.ssh_host, self.hostname, self.identity_file
		)
	}
}

/// Suggested key path for a host alias: `github.com-work` becomes `~/.ssh/github_work`.
pub fn default_identity_file(ssh_host: &str) -> String {
	format!("~/.ssh/{}", ssh_host.replacen("github.com-", "github_", 1))
}

/// The host token of a `Host` line, if `line` is one.
fn host_token(line: &str) -> Option<&str> {
	let rest = line.trim().strip_prefix("Host ")?;
	rest.split_whitespace().next()
}

fn is_generator_comment(line: &str) -> bool {
	let trimmed = line.trim();
	trimmed.starts_with('#') && trimmed.ends_with(GENERATOR_MARKER)
}

/// Whether `text` already holds a `Host` block for `ssh_host`.
pub fn has_host_block(text: &str, ssh_host: &str) -> bool {
	text.lines().any(|line| host_token(line) == Some(ssh_host))
}

/// Merge a rendered block into the secondary SSH config text.
///
/// Any existing block for `ssh_host` is removed: from its `Host` line (and the
/// generator comment right above it) up to the next `Host` line, the next
/// generator comment, or the end of the file. The new block is then appended
/// so the most recently configured profile comes last.
pub fn merge_fragment(existing: Option<&str>, ssh_host: &str, block: &str) -> String {
	let existing = match existing {
		Some(text) if !text.is_empty() => text,
		_ => return block.to_string(),
	};

	let mut kept: Vec<&str> = Vec::new();
	let mut skipping = false;

	for line in existing.split('\n') {
		match host_token(line) {
			Some(host) if host == ssh_host => {
				if kept.last().is_some_and(|prev| is_generator_comment(prev)) {
					kept.pop();
				}
				skipping = true;
				continue;
			}
			Some(_) => skipping = false,
			None if skipping && is_generator_comment(line) => skipping = false,
			None => {}
		}

		if !skipping {
			kept.push(line);
		}
	}

	let retained = kept.join("\n");
	if retained.is_empty() {
		block.to_string()
	} else if retained.ends_with('\n') {
		format!("{retained}{block}")
	} else {
		format!("{retained}\n{block}")
	}
}
