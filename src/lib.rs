//! gclone - clone Git repositories through per-profile SSH host aliases.
//!
//! This library provides the core functionality for gclone, including:
//! - Profile store loading and saving
//! - Profile detection from a remote URL and host alias rewriting
//! - SSH config reconciliation (`Host` blocks and the `Include` directive)
//! - `git clone` orchestration behind an injectable process runner
//!
//! # Example
//!
//! ```no_run
//! use gclone::config::{load_config, user_config_path};
//! use gclone::remote::{detect_profile, transform_url};
//!
//! let config = load_config(&user_config_path().unwrap()).unwrap();
//! let url = "git@github.com:acme/widgets.git";
//!
//! if let Some(key) = detect_profile(url, &config) {
//!     let profile = &config.profiles[key];
//!     println!("{}", transform_url(url, Some(profile)).unwrap());
//! }
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod fsutil;
pub mod remote;
pub mod sshconfig;
pub mod ui;

pub use error::{GcloneError, Result};
