use crate::error::Result;
use crate::fsutil::{ensure_dir, read_optional, write_atomic};
use crate::sshconfig::fragment::{Fragment, has_host_block, merge_fragment};
use crate::sshconfig::include::ensure_include;
use std::path::{Path, PathBuf};

/// Computed new contents for both SSH config files, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
	pub secondary_path: PathBuf,
	pub secondary_content: String,
	/// Whether the secondary file existed before.
	pub secondary_existed: bool,
	/// Whether the secondary file already held a block for this host.
	pub replaces_block: bool,

	pub primary_path: PathBuf,
	/// `None` when the primary config already includes the secondary file.
	pub primary_content: Option<String>,
	/// Whether the primary file existed before.
	pub primary_existed: bool,
}

/// What `Reconciler::apply` wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
	pub secondary_created: bool,
	pub include_added: bool,
	pub primary_created: bool,
}

/// Merges generated fragments into the secondary SSH config and keeps the
/// primary SSH config including it.
#[derive(Debug, Clone)]
pub struct Reconciler {
	primary_path: PathBuf,
	secondary_path: PathBuf,
	include_path: String,
}

impl Reconciler {
	pub fn new(
		primary_path: impl Into<PathBuf>,
		secondary_path: impl Into<PathBuf>,
		include_path: impl Into<String>,
	) -> Self {
		Reconciler {
			primary_path: primary_path.into(),
			secondary_path: secondary_path.into(),
			include_path: include_path.into(),
		}
	}

	/// Reconciler for the default `~/.ssh/config` and `~/.gclone/ssh_config`.
	pub fn for_user() -> Result<Self> {
		Ok(Reconciler::new(
			crate::config::primary_ssh_config_path()?,
			crate::config::secondary_ssh_config_path()?,
			crate::config::SSH_INCLUDE_PATH,
		))
	}

	pub fn primary_path(&self) -> &Path {
		&self.primary_path
	}

	pub fn secondary_path(&self) -> &Path {
		&self.secondary_path
	}

	pub fn include_path(&self) -> &str {
		&self.include_path
	}

	/// Read both files and compute their merged contents in memory.
	pub fn plan(&self, fragment: &Fragment) -> Result<ReconcilePlan> {
		let secondary = read_optional(&self.secondary_path)?;
		let primary = read_optional(&self.primary_path)?;

		let replaces_block = secondary
			.as_deref()
			.is_some_and(|text| has_host_block(text, &fragment.ssh_host));
		let secondary_content =
			merge_fragment(secondary.as_deref(), &fragment.ssh_host, &fragment.render());
		let primary_content = ensure_include(primary.as_deref(), &self.include_path);

		tracing::debug!(
			ssh_host = %fragment.ssh_host,
			replaces_block,
			include_needed = primary_content.is_some(),
			"planned ssh config reconciliation"
		);

		Ok(ReconcilePlan {
			secondary_path: self.secondary_path.clone(),
			secondary_content,
			secondary_existed: secondary.is_some(),
			replaces_block,
			primary_path: self.primary_path.clone(),
			primary_content,
			primary_existed: primary.is_some(),
		})
	}

	/// Write a plan: the secondary file first, then the primary file if it changes.
	///
	/// Each file is replaced atomically. A failure on the secondary file
	/// returns before the primary file is touched.
	pub fn apply(&self, plan: &ReconcilePlan) -> Result<ReconcileOutcome> {
		if let Some(dir) = plan.secondary_path.parent() {
			ensure_dir(dir, 0o755)?;
		}
		write_atomic(&plan.secondary_path, &plan.secondary_content)?;
		tracing::info!(path = %plan.secondary_path.display(), "updated secondary ssh config");

		if let Some(content) = &plan.primary_content {
			if let Some(dir) = plan.primary_path.parent() {
				ensure_dir(dir, 0o700)?;
			}
			write_atomic(&plan.primary_path, content)?;
			tracing::info!(path = %plan.primary_path.display(), "added include directive");
		}

		Ok(ReconcileOutcome {
			secondary_created: !plan.secondary_existed,
			include_added: plan.primary_content.is_some(),
			primary_created: plan.primary_content.is_some() && !plan.primary_existed,
		})
	}
}
