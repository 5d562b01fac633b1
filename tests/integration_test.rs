#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn gclone_cmd(home: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("gclone").unwrap();
	cmd.env("HOME", home)
		.env("NO_COLOR", "1")
		.env_remove("GCLONE_LOG");
	cmd
}

fn write_profiles(home: &Path) {
	let dir = home.join(".gclone");
	fs::create_dir_all(&dir).unwrap();
	fs::write(
		dir.join("config.toml"),
		r#"
[profiles.personal]
name = "Personal"
ssh_host = "github.com-personal"
url_patterns = ["alice"]

[profiles.work]
name = "Work"
ssh_host = "github.com-work"
url_patterns = ["acme"]

[profiles.work.git_configs]
"user.email" = "me@acme.com"

[profiles.broken]
name = "Broken"
"#,
	)
	.unwrap();
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let home = tempfile::tempdir().unwrap();
	gclone_cmd(home.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("per-profile SSH host aliases"));
}

#[test]
fn test_version_flag() {
	let home = tempfile::tempdir().unwrap();
	gclone_cmd(home.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("gclone"));
}

#[test]
fn test_no_args_shows_help() {
	let home = tempfile::tempdir().unwrap();
	gclone_cmd(home.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// init / config tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let home = tempfile::tempdir().unwrap();
	let config_path = home.path().join(".gclone").join("config.toml");

	gclone_cmd(home.path())
		.arg("init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Configuration initialized"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("github.com-personal"));
	assert!(content.contains("github.com-work"));
}

#[test]
fn test_init_fails_if_exists() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.arg("init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["init", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(home.path().join(".gclone/config.toml")).unwrap();
	assert!(content.contains("github.com-personal"));
	assert!(!content.contains("Broken"));
}

#[test]
fn test_config_show_missing() {
	let home = tempfile::tempdir().unwrap();
	gclone_cmd(home.path())
		.arg("config")
		.assert()
		.success()
		.stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_config_show_toml() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["config", "--format", "toml"])
		.assert()
		.success()
		.stdout(predicate::str::contains("[profiles.work]"))
		.stdout(predicate::str::contains("ssh_host = \"github.com-work\""));
}

#[test]
fn test_config_show_pretty_lists_each_profile_once() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	let output = gclone_cmd(home.path()).arg("config").output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();

	assert_eq!(stdout.matches("Profile: work").count(), 1);
	assert_eq!(stdout.matches("Profile: personal").count(), 1);
	assert!(stdout.contains("user.email = me@acme.com"));
}

#[test]
fn test_config_flag_overrides_location() {
	let home = tempfile::tempdir().unwrap();
	let custom = home.path().join("custom.toml");

	gclone_cmd(home.path())
		.args(["init", "--config"])
		.arg(&custom)
		.assert()
		.success();

	assert!(custom.exists());
	assert!(!home.path().join(".gclone/config.toml").exists());
}

// ============================================================================
// profile tests
// ============================================================================

#[test]
fn test_profile_add_list_remove() {
	let home = tempfile::tempdir().unwrap();

	gclone_cmd(home.path())
		.args([
			"profile",
			"add",
			"oss",
			"--ssh-host",
			"github.com-oss",
			"--url-pattern",
			"github.com:oss-org",
			"--git-email",
			"oss@example.com",
			"--git-config",
			"commit.gpgsign=true",
			"-g",
			"core.sshCommand=ssh -o IdentitiesOnly=yes",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains("Profile 'oss' added"));

	gclone_cmd(home.path())
		.args(["profile", "list"])
		.assert()
		.success()
		.stdout(predicate::str::contains("github.com-oss"))
		.stdout(predicate::str::contains("user.email = oss@example.com"))
		.stdout(predicate::str::contains("commit.gpgsign = true"))
		.stdout(predicate::str::contains(
			"core.sshCommand = ssh -o IdentitiesOnly=yes",
		));

	gclone_cmd(home.path())
		.args(["profile", "remove", "oss", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(home.path().join(".gclone/config.toml")).unwrap();
	assert!(!content.contains("github.com-oss"));
}

#[test]
fn test_profile_add_rejects_malformed_git_config() {
	let home = tempfile::tempdir().unwrap();

	gclone_cmd(home.path())
		.args([
			"profile",
			"add",
			"oss",
			"--ssh-host",
			"github.com-oss",
			"--git-config",
			"commit.gpgsign",
		])
		.assert()
		.failure()
		.stderr(predicate::str::contains("expected KEY=VALUE"));

	assert!(!home.path().join(".gclone/config.toml").exists());
}

#[test]
fn test_profile_remove_unknown() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["profile", "remove", "nope", "--force"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Profile 'nope' not found"));
}

// ============================================================================
// clone tests (failures happen before git is invoked)
// ============================================================================

#[test]
fn test_clone_without_profiles() {
	let home = tempfile::tempdir().unwrap();
	gclone_cmd(home.path())
		.args(["clone", "git@github.com:acme/widgets.git"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("No profiles found"));
}

#[test]
fn test_clone_rejects_https_url() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["clone", "https://github.com/acme/widgets.git"])
		.current_dir(home.path())
		.assert()
		.failure()
		.stdout(predicate::str::contains("Automatically detected profile"))
		.stderr(predicate::str::contains("Unsupported git URL format"));
}

#[test]
fn test_clone_unknown_profile() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["clone", "git@github.com:acme/widgets.git", "--profile", "nope"])
		.current_dir(home.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Profile 'nope' not found"));
}

#[test]
fn test_clone_profile_without_ssh_host() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["clone", "git@github.com:acme/widgets.git", "-p", "broken"])
		.current_dir(home.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("does not have an SSH host"));
}

// ============================================================================
// ssh-config tests
// ============================================================================

#[test]
fn test_ssh_config_writes_both_files() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["ssh-config", "work", "--identity-file", "~/.ssh/github_work"])
		.assert()
		.success()
		.stdout(predicate::str::contains("SSH configuration created"))
		.stdout(predicate::str::contains("does not exist yet"));

	let secondary = fs::read_to_string(home.path().join(".gclone/ssh_config")).unwrap();
	assert_eq!(
		secondary,
		"# Work profile (added by gclone)\nHost github.com-work\n  Hostname github.com\n  AddKeysToAgent yes\n  UseKeychain yes\n  IdentityFile ~/.ssh/github_work\n"
	);
	let primary = fs::read_to_string(home.path().join(".ssh/config")).unwrap();
	assert_eq!(primary, "Include ~/.gclone/ssh_config\n");
}

#[test]
fn test_ssh_config_rerun_is_idempotent() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());
	fs::create_dir_all(home.path().join(".ssh")).unwrap();
	fs::write(
		home.path().join(".ssh/config"),
		"# mine\nHost *\n  ServerAliveInterval 60\n",
	)
	.unwrap();

	for profile in ["personal", "work", "work"] {
		gclone_cmd(home.path())
			.args(["ssh-config", profile, "-i", "~/.ssh/key", "--yes"])
			.assert()
			.success();
	}

	let secondary = fs::read_to_string(home.path().join(".gclone/ssh_config")).unwrap();
	assert_eq!(secondary.matches("Host github.com-work").count(), 1);
	assert_eq!(secondary.matches("Host github.com-personal").count(), 1);
	assert_eq!(secondary.matches("# Work profile").count(), 1);
	assert!(
		secondary.find("github.com-personal").unwrap() < secondary.find("github.com-work").unwrap()
	);

	let primary = fs::read_to_string(home.path().join(".ssh/config")).unwrap();
	assert_eq!(
		primary,
		"# mine\nInclude ~/.gclone/ssh_config\nHost *\n  ServerAliveInterval 60\n"
	);
}

#[test]
fn test_ssh_config_dry_run_writes_nothing() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["ssh-config", "personal", "-i", "~/.ssh/p", "--dry-run"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Dry Run"))
		.stdout(predicate::str::contains("Host github.com-personal"))
		.stdout(predicate::str::contains("Include ~/.gclone/ssh_config"));

	assert!(!home.path().join(".gclone/ssh_config").exists());
	assert!(!home.path().join(".ssh/config").exists());
}

#[test]
fn test_ssh_config_missing_ssh_host() {
	let home = tempfile::tempdir().unwrap();
	write_profiles(home.path());

	gclone_cmd(home.path())
		.args(["ssh-config", "broken", "-i", "~/.ssh/b"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("does not have an SSH host"));

	assert!(!home.path().join(".gclone/ssh_config").exists());
}
