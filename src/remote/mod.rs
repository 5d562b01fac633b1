//! Remote URL matching and rewriting for gclone.
//!
//! This module handles:
//! - Profile detection using substring patterns over a normalized URL
//! - Host alias substitution in SSH shorthand URLs

pub mod matcher;
pub mod rewriter;

pub use matcher::{detect_profile, normalize_url};
pub use rewriter::{SshRemote, repository_name, transform_url};
