//! SSH client-config reconciliation for gclone.
//!
//! This module handles:
//! - Rendering a profile's `Host` block
//! - Merging that block into `~/.gclone/ssh_config` without duplicates
//! - Keeping an `Include` directive for it in `~/.ssh/config`
//!
//! Only `Host` and `Include` lines are recognized; everything else is copied
//! through as opaque text.

pub mod fragment;
pub mod include;
pub mod reconciler;

pub use fragment::{
	DEFAULT_HOSTNAME, Fragment, default_identity_file, has_host_block, merge_fragment,
};
pub use include::{ensure_include, include_directive};
pub use reconciler::{ReconcileOutcome, ReconcilePlan, Reconciler};
