//! Filesystem helpers shared by the configuration store and the SSH reconciler.

use crate::error::{GcloneError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read a file, returning `None` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
	match std::fs::read_to_string(path) {
		Ok(content) => Ok(Some(content)),
		Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
		Err(source) => Err(GcloneError::FileRead {
			path: path.to_path_buf(),
			source,
		}),
	}
}

/// Create `dir` and its parents. On Unix the leaf gets `mode` when it is newly created.
pub fn ensure_dir(dir: &Path, mode: u32) -> Result<()> {
	if dir.as_os_str().is_empty() || dir.is_dir() {
		return Ok(());
	}

	let mut builder = std::fs::DirBuilder::new();
	builder.recursive(true);
	#[cfg(unix)]
	{
		use std::os::unix::fs::DirBuilderExt;
		builder.mode(mode);
	}
	#[cfg(not(unix))]
	let _ = mode;

	builder.create(dir).map_err(|source| GcloneError::CreateDir {
		path: dir.to_path_buf(),
		source,
	})
}

/// The file a write to `path` should land on: the link target when `path` is a symlink.
fn resolve_write_target(path: &Path) -> PathBuf {
	let is_link = std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
	if !is_link {
		return path.to_path_buf();
	}

	match std::fs::canonicalize(path) {
		Ok(target) => target,
		// Dangling link: follow one hop so the file is created where it points.
		Err(_) => match std::fs::read_link(path) {
			Ok(link) => path.parent().map_or(link.clone(), |dir| dir.join(&link)),
			Err(_) => path.to_path_buf(),
		},
	}
}

/// Replace `path` with `content` in a single rename.
///
/// The content is written to a temp file in the same directory first, so a
/// crash mid-write leaves the previous file intact. A symlinked `path` stays a
/// symlink; its target is replaced instead.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
	let write_err = |source| GcloneError::FileWrite {
		path: path.to_path_buf(),
		source,
	};
	let target = resolve_write_target(path);
	let path = target.as_path();
	let dir = path.parent().unwrap_or_else(|| Path::new("."));

	let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
	tmp.write_all(content.as_bytes()).map_err(write_err)?;
	tmp.as_file().sync_all().map_err(write_err)?;

	// Keep the permissions of the file being replaced (ssh refuses group-writable configs).
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		let perms = std::fs::metadata(path)
			.map(|m| m.permissions())
			.unwrap_or_else(|_| std::fs::Permissions::from_mode(0o644));
		std::fs::set_permissions(tmp.path(), perms).map_err(write_err)?;
	}

	tmp.persist(path).map_err(|e| write_err(e.error))?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
	Ok(())
}
