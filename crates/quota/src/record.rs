use retouch_primitives::TimestampMs;
use serde::{Deserialize, Serialize};

use crate::QuotaError;

/// Persisted usage for one window.
///
/// Stored as JSON, e.g. `{"count":3,"window_start_ms":1700000000000}`.
/// Unknown fields and negative counts are rejected on decode since the
/// storage is writable by anything with access to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuotaRecord {
	/// Consumptions recorded in this window.
	pub count: u32,
	/// Start of the window, milliseconds since the Unix epoch.
	pub window_start_ms: TimestampMs,
}

impl QuotaRecord {
	/// A zero-count record whose window starts at `window_start_ms`.
	pub fn fresh(window_start_ms: TimestampMs) -> Self {
		Self {
			count: 0,
			window_start_ms,
		}
	}

	pub fn encode(&self) -> Result<Vec<u8>, QuotaError> {
		serde_json::to_vec(self).map_err(QuotaError::Encode)
	}

	pub fn decode(bytes: &[u8]) -> Result<Self, QuotaError> {
		serde_json::from_slice(bytes).map_err(QuotaError::Decode)
	}
}
