use std::path::PathBuf;

use retouch_primitives::TimestampMs;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_WINDOW_MS, WindowPolicy};

/// Limits and storage location for a [`QuotaTracker`](crate::QuotaTracker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuotaConfig {
	/// Maximum consumptions per window.
	pub limit: u32,
	/// Window length in milliseconds.
	pub window_ms: TimestampMs,
	pub policy: WindowPolicy,
	/// Record file; the platform data directory is used when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<PathBuf>,
}

impl Default for QuotaConfig {
	fn default() -> Self {
		Self {
			limit: 10,
			window_ms: DEFAULT_WINDOW_MS,
			policy: WindowPolicy::Rolling,
			path: None,
		}
	}
}
