use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use gclone::GcloneError;
use gclone::config::{
	Config, Profile, expand_tilde, load_config, render_config, save_config, user_config_path,
};
use gclone::exec::{CloneRequest, ProcessRunner, SystemRunner, clone_repository};
use gclone::remote::{detect_profile, repository_name, transform_url};
use gclone::sshconfig::{DEFAULT_HOSTNAME, Fragment, Reconciler, default_identity_file};
use gclone::ui::{self, Prompter, TerminalPrompter};

#[derive(Parser)]
#[command(name = "gclone")]
#[command(
	author,
	version,
	about = "Clone Git repositories through per-profile SSH host aliases"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Show debug logging (overridden by GCLONE_LOG)
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Path to config file (default is ~/.gclone/config.toml)
	#[arg(short, long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Clone a repository with a profile's SSH host and git settings
	Clone {
		/// SSH remote URL (git@host:owner/repo.git)
		url: String,

		/// Directory to clone into
		destination: Option<String>,

		/// Profile to use instead of detecting one from the URL
		#[arg(short, long)]
		profile: Option<String>,

		/// Create a shallow clone with the given depth
		#[arg(short, long)]
		depth: Option<u32>,

		/// Clone the given branch instead of the remote's HEAD
		#[arg(short, long)]
		branch: Option<String>,

		/// Extra arguments for git clone, after `--`
		#[arg(last = true)]
		extra: Vec<String>,
	},

	/// Generate or update the SSH config for a profile
	SshConfig {
		/// Profile to configure
		profile: Option<String>,

		/// SSH identity file (default is ~/.ssh/github_<profile>)
		#[arg(short, long)]
		identity_file: Option<String>,

		/// Real host the alias points at
		#[arg(long, default_value = DEFAULT_HOSTNAME)]
		hostname: String,

		/// Print the resulting files without writing them
		#[arg(short = 'n', long)]
		dry_run: bool,

		/// Replace an existing block for the host without asking
		#[arg(short, long)]
		yes: bool,
	},

	/// Create a configuration file with sample profiles
	Init {
		/// Overwrite an existing configuration
		#[arg(short, long)]
		force: bool,
	},

	/// Display the configuration
	Config {
		#[arg(short, long, value_enum, default_value_t = Format::Pretty)]
		format: Format,
	},

	/// Manage profiles
	Profile {
		#[command(subcommand)]
		action: ProfileAction,
	},
}

#[derive(Subcommand)]
enum ProfileAction {
	/// List all profiles
	List,
	/// Add or replace a profile
	Add {
		/// Profile key
		key: String,

		/// Display name (defaults to the key)
		#[arg(short, long)]
		name: Option<String>,

		/// SSH host alias, e.g. github.com-work
		#[arg(short, long)]
		ssh_host: Option<String>,

		/// URL pattern for automatic detection (repeatable)
		#[arg(short = 'p', long = "url-pattern")]
		url_patterns: Vec<String>,

		/// user.name to set after cloning
		#[arg(short = 'u', long)]
		git_username: Option<String>,

		/// user.email to set after cloning
		#[arg(short = 'e', long)]
		git_email: Option<String>,

		/// Extra git config to set after cloning (repeatable)
		#[arg(short = 'g', long = "git-config", value_name = "KEY=VALUE", value_parser = parse_git_config)]
		git_configs: Vec<(String, String)>,

		/// Overwrite an existing profile without asking
		#[arg(short, long)]
		force: bool,
	},
	/// Remove a profile
	Remove {
		key: String,

		/// Remove without confirmation
		#[arg(short, long)]
		force: bool,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
	Pretty,
	Toml,
}

/// Collaborators wired once in `run` and handed to each command.
struct App<'a> {
	runner: &'a dyn ProcessRunner,
	prompter: &'a dyn Prompter,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env("GCLONE_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let config_path = match cli.config {
		Some(path) => path,
		None => user_config_path().context("Failed to locate config file")?,
	};

	let runner = SystemRunner;
	let prompter = TerminalPrompter;
	let app = App {
		runner: &runner,
		prompter: &prompter,
	};

	match cli.command {
		Commands::Clone {
			url,
			destination,
			profile,
			depth,
			branch,
			extra,
		} => {
			let request = CloneRequest {
				url,
				destination,
				depth,
				branch,
				extra_args: extra,
			};
			app.clone_repo(&config_path, request, profile.as_deref())
		}
		Commands::SshConfig {
			profile,
			identity_file,
			hostname,
			dry_run,
			yes,
		} => {
			let reconciler = Reconciler::for_user().context("Failed to locate SSH config files")?;
			let options = SshConfigOptions {
				identity_file,
				hostname,
				dry_run,
				yes,
			};
			app.ssh_config(&config_path, &reconciler, profile.as_deref(), options)
		}
		Commands::Init { force } => handle_init(&config_path, force),
		Commands::Config { format } => handle_config_show(&config_path, format),
		Commands::Profile { action } => app.profile(&config_path, action),
	}
}

fn load_profiles(config_path: &Path) -> Result<Config> {
	let config = load_config(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;
	if config.profiles.is_empty() {
		return Err(GcloneError::NoProfiles.into());
	}
	Ok(config)
}

/// A profile with a usable SSH host alias.
fn require_ssh_host<'c>(config: &'c Config, key: &str) -> Result<(&'c Profile, &'c str)> {
	let profile = config.profile(key)?;
	let host = profile
		.ssh_host()
		.ok_or_else(|| GcloneError::MissingSshHost {
			name: key.to_string(),
		})?;
	Ok((profile, host))
}

struct SshConfigOptions {
	identity_file: Option<String>,
	hostname: String,
	dry_run: bool,
	yes: bool,
}

impl App<'_> {
	fn select_profile(&self, prompt: &str, config: &Config) -> Result<String> {
		let keys = config.profile_keys();
		let index = self.prompter.select(prompt, &keys)?;
		Ok(keys[index].to_string())
	}

	fn clone_repo(
		&self,
		config_path: &Path,
		request: CloneRequest,
		profile: Option<&str>,
	) -> Result<ExitCode> {
		let config = load_profiles(config_path)?;

		let key = match profile {
			Some(key) => key.to_string(),
			None => match detect_profile(&request.url, &config) {
				Some(key) => {
					ui::info(format!(
						"Automatically detected profile: {}",
						ui::highlight(key)
					));
					key.to_string()
				}
				None => self.select_profile("Select profile", &config)?,
			},
		};

		let (profile, _) = require_ssh_host(&config, &key)?;
		let transformed = transform_url(&request.url, Some(profile))?;

		ui::section(format!("Cloning with profile: {}", ui::highlight(&key)));
		ui::key_value("Original URL", &request.url);
		ui::key_value("Transformed URL", &transformed);
		if !profile.git_configs.is_empty() {
			ui::info("Git configs to apply:");
			for (k, v) in &profile.git_configs {
				ui::key_value(k, v);
			}
		}
		println!();

		let cwd = std::env::current_dir().context("Failed to get current directory")?;
		clone_repository(self.runner, &request, profile, &cwd)
			.context("Error cloning repository")?;

		let repo_name = request
			.destination
			.clone()
			.or_else(|| repository_name(&request.url))
			.unwrap_or_default();
		ui::success(format!("Repository cloned successfully: {repo_name}"));
		if !profile.git_configs.is_empty() {
			ui::success("Git configurations applied successfully");
		}

		Ok(ExitCode::SUCCESS)
	}

	fn ssh_config(
		&self,
		config_path: &Path,
		reconciler: &Reconciler,
		profile: Option<&str>,
		options: SshConfigOptions,
	) -> Result<ExitCode> {
		let config = load_profiles(config_path)?;

		let key = match profile {
			Some(key) => key.to_string(),
			None if config.profiles.len() == 1 => config.profile_keys()[0].to_string(),
			None => self.select_profile("Select profile to configure SSH for", &config)?,
		};
		let (profile, ssh_host) = require_ssh_host(&config, &key)?;

		let identity_file = match options.identity_file {
			Some(path) => path,
			None => {
				let suggested = default_identity_file(ssh_host);
				self.prompter
					.input("SSH identity file path", Some(&suggested))?
			}
		};

		let fragment = Fragment {
			display_name: profile.name.clone(),
			ssh_host: ssh_host.to_string(),
			hostname: options.hostname,
			identity_file,
		};
		let plan = reconciler
			.plan(&fragment)
			.context("Failed to read SSH config")?;

		if options.dry_run {
			ui::section("SSH Configuration (Dry Run)");
			ui::info(format!(
				"{} would contain:",
				plan.secondary_path.display()
			));
			println!();
			print!("{}", plan.secondary_content);
			println!();
			match &plan.primary_content {
				Some(content) => {
					ui::info(format!("{} would contain:", plan.primary_path.display()));
					println!();
					print!("{content}");
					println!();
				}
				None => ui::info(format!(
					"{} already includes {}",
					plan.primary_path.display(),
					reconciler.include_path()
				)),
			}
			return Ok(ExitCode::SUCCESS);
		}

		if plan.replaces_block {
			ui::warning(format!(
				"SSH configuration for '{}' already exists in {}",
				ssh_host,
				plan.secondary_path.display()
			));
			if !options.yes && !self.prompter.confirm("Do you want to update it", false)? {
				ui::warning("Operation cancelled");
				return Ok(ExitCode::SUCCESS);
			}
		}

		let outcome = reconciler
			.apply(&plan)
			.context("Failed to write SSH config")?;

		let action = if outcome.secondary_created {
			"created"
		} else {
			"updated"
		};
		ui::success(format!(
			"SSH configuration {action} at {}",
			plan.secondary_path.display()
		));
		if outcome.primary_created {
			ui::success(format!(
				"Created SSH config file at {} with include directive",
				plan.primary_path.display()
			));
		} else if outcome.include_added {
			ui::success(format!(
				"Added include directive to {}",
				plan.primary_path.display()
			));
		}
		ui::info(format!("Configuration for '{ssh_host}' added:"));
		ui::block(&fragment.render());

		if !expand_tilde(&fragment.identity_file).exists() {
			ui::warning(format!(
				"SSH key {} does not exist yet",
				fragment.identity_file
			));
			ui::info("You can create it with:");
			println!(
				"  ssh-keygen -t ed25519 -f {} -C \"your_email@example.com\"",
				fragment.identity_file
			);
		}

		Ok(ExitCode::SUCCESS)
	}

	fn profile(&self, config_path: &Path, action: ProfileAction) -> Result<ExitCode> {
		match action {
			ProfileAction::List => {
				let config = load_config(config_path)?;
				if config.profiles.is_empty() {
					ui::warning("No profiles found. Run 'gclone init' to create default profiles.");
					return Ok(ExitCode::SUCCESS);
				}
				ui::section("Available profiles");
				for (key, profile) in &config.profiles {
					print_profile(key, profile);
				}
				Ok(ExitCode::SUCCESS)
			}
			ProfileAction::Add {
				key,
				name,
				ssh_host,
				url_patterns,
				git_username,
				git_email,
				git_configs,
				force,
			} => {
				let mut config = load_config(config_path)?;

				if config.profiles.contains_key(&key) {
					ui::warning(format!("Profile '{key}' already exists"));
					if !force && !self.prompter.confirm("Do you want to overwrite it", false)? {
						ui::warning("Operation cancelled");
						return Ok(ExitCode::SUCCESS);
					}
				}

				let ssh_host = match ssh_host {
					Some(host) => host,
					None => self
						.prompter
						.input("SSH Host (e.g., github.com-personal)", None)?,
				};
				if ssh_host.trim().is_empty() {
					return Err(GcloneError::MissingSshHost { name: key }.into());
				}

				let mut profile = Profile {
					name: name.unwrap_or_else(|| key.clone()),
					ssh_host,
					url_patterns,
					git_configs: git_configs.into_iter().collect(),
				};
				if let Some(username) = git_username {
					profile.git_configs.insert("user.name".to_string(), username);
				}
				if let Some(email) = git_email {
					profile.git_configs.insert("user.email".to_string(), email);
				}

				config.profiles.insert(key.clone(), profile);
				save_config(&config, config_path)
					.with_context(|| format!("Failed to save {}", config_path.display()))?;
				ui::success(format!("Profile '{key}' added successfully"));
				Ok(ExitCode::SUCCESS)
			}
			ProfileAction::Remove { key, force } => {
				let mut config = load_config(config_path)?;
				config.profile(&key)?;

				if !force
					&& !self.prompter.confirm(
						&format!("Are you sure you want to remove profile '{key}'"),
						false,
					)? {
					ui::warning("Operation cancelled");
					return Ok(ExitCode::SUCCESS);
				}

				config.profiles.remove(&key);
				save_config(&config, config_path)
					.with_context(|| format!("Failed to save {}", config_path.display()))?;
				ui::success(format!("Profile '{key}' removed successfully"));
				Ok(ExitCode::SUCCESS)
			}
		}
	}
}

/// Parse a `--git-config` value of the form `key=value`.
fn parse_git_config(raw: &str) -> std::result::Result<(String, String), String> {
	match raw.split_once('=') {
		Some((key, value)) if !key.trim().is_empty() => {
			Ok((key.trim().to_string(), value.to_string()))
		}
		_ => Err(format!("expected KEY=VALUE, got '{raw}'")),
	}
}

fn print_profile(key: &str, profile: &Profile) {
	ui::info(format!("Profile: {}", ui::highlight(key)));
	ui::key_value("Name", &profile.name);
	ui::key_value("SSH Host", &profile.ssh_host);
	if !profile.url_patterns.is_empty() {
		println!("  URL Patterns:");
		for pattern in &profile.url_patterns {
			println!("    {pattern}");
		}
	}
	if !profile.git_configs.is_empty() {
		println!("  Git Configs:");
		for (k, v) in &profile.git_configs {
			println!("    {k} = {v}");
		}
	}
	println!();
}

fn handle_init(config_path: &Path, force: bool) -> Result<ExitCode> {
	if config_path.exists() && !force {
		anyhow::bail!(
			"Configuration file already exists at {}. Use --force to overwrite.",
			config_path.display()
		);
	}

	let config = Config::sample();
	save_config(&config, config_path)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	ui::success(format!(
		"Configuration initialized successfully at {}",
		config_path.display()
	));
	ui::info("Default profiles created:");
	for (key, profile) in &config.profiles {
		println!(
			"  - {} (SSH Host: {})",
			ui::highlight(key),
			profile.ssh_host
		);
		println!("    URL Patterns: {}", profile.url_patterns.join(", "));
	}

	ui::section("Examples");
	ui::info("Clone with a specific profile:");
	println!("  gclone clone git@github.com:user/repo.git --profile=personal");
	ui::info("Or let gclone detect the profile from its URL patterns:");
	println!("  gclone clone git@github.com:your-personal-username/repo.git");
	ui::warning("Only SSH URLs (git@github.com:user/repo.git) are supported");

	ui::section("SSH Configuration");
	ui::info("Generate the matching SSH host entry for a profile with:");
	println!("  gclone ssh-config personal");

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(config_path: &Path, format: Format) -> Result<ExitCode> {
	if !config_path.exists() {
		ui::warning(format!(
			"Configuration file does not exist at {}",
			config_path.display()
		));
		ui::warning("Run 'gclone init' to create a default configuration");
		return Ok(ExitCode::SUCCESS);
	}

	let config = load_config(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;

	match format {
		Format::Toml => print!("{}", render_config(&config)?),
		Format::Pretty => {
			ui::info(format!("Configuration file: {}", config_path.display()));
			if config.profiles.is_empty() {
				ui::warning("No profiles found");
				return Ok(ExitCode::SUCCESS);
			}
			println!();
			for (key, profile) in &config.profiles {
				print_profile(key, profile);
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}
