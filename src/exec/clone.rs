use crate::config::Profile;
use crate::error::{GcloneError, Result};
use crate::exec::ProcessRunner;
use crate::remote::{repository_name, transform_url};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything needed to clone one repository.
#[derive(Debug, Clone, Default)]
pub struct CloneRequest {
	/// Remote URL as given by the user.
	pub url: String,
	pub destination: Option<String>,
	pub depth: Option<u32>,
	pub branch: Option<String>,
	/// Arguments after a literal `--`, passed to `git clone` untouched.
	pub extra_args: Vec<String>,
}

/// Build the `git clone` argument list for an already transformed URL.
pub fn clone_args(url: &str, request: &CloneRequest) -> Vec<String> {
	let mut args = vec!["clone".to_string(), url.to_string()];

	if let Some(dest) = &request.destination {
		args.push(dest.clone());
	}
	if let Some(depth) = request.depth.filter(|d| *d > 0) {
		args.push(format!("--depth={depth}"));
	}
	if let Some(branch) = request.branch.as_deref().filter(|b| !b.is_empty()) {
		args.push(format!("--branch={branch}"));
	}
	args.extend(request.extra_args.iter().cloned());

	args
}

/// Clone a repository through the profile's SSH host alias, then apply its git settings.
///
/// Returns the directory the repository was cloned into.
pub fn clone_repository(
	runner: &dyn ProcessRunner,
	request: &CloneRequest,
	profile: &Profile,
	cwd: &Path,
) -> Result<PathBuf> {
	let url = transform_url(&request.url, Some(profile))?;
	tracing::info!(original = %request.url, transformed = %url, "cloning repository");

	runner.run("git", &clone_args(&url, request), Some(cwd))?;

	let dir_name = request
		.destination
		.clone()
		.or_else(|| repository_name(&url))
		.unwrap_or_default();
	let repo_path = cwd.join(dir_name);

	if !profile.git_configs.is_empty() {
		apply_git_configs(runner, &repo_path, &profile.git_configs)?;
	}

	Ok(repo_path)
}

/// Set each entry as repository-local git configuration, in key order.
pub fn apply_git_configs(
	runner: &dyn ProcessRunner,
	repo_path: &Path,
	configs: &BTreeMap<String, String>,
) -> Result<()> {
	if !repo_path.is_dir() {
		return Err(GcloneError::RepositoryMissing {
			path: repo_path.to_path_buf(),
		});
	}

	for (key, value) in configs {
		tracing::info!(%key, %value, "setting git config");
		let args = vec![
			"config".to_string(),
			"--local".to_string(),
			key.clone(),
			value.clone(),
		];
		runner.run("git", &args, Some(repo_path))?;
	}

	Ok(())
}
