use retouch_primitives::TimestampMs;
use serde::{Deserialize, Serialize};

/// Twenty-four hours in milliseconds.
pub const DEFAULT_WINDOW_MS: TimestampMs = 86_400_000;

/// How far ahead of the reader's clock a stored window may start before the
/// record is treated as corrupt.
pub const MAX_FUTURE_SKEW_MS: TimestampMs = 5 * 60 * 1_000;

/// How window boundaries are placed on the timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPolicy {
	/// The window opens at first use and lasts `window_ms` from there.
	#[default]
	Rolling,
	/// Windows are fixed multiples of `window_ms` since the Unix epoch.
	/// With the 24h default this resets at UTC midnight.
	Aligned,
}

impl WindowPolicy {
	/// Start of the window that a fresh record opened at `now` belongs to.
	pub fn window_start(self, now: TimestampMs, window_ms: TimestampMs) -> TimestampMs {
		match self {
			Self::Rolling => now,
			Self::Aligned => now.div_euclid(window_ms) * window_ms,
		}
	}

	/// First instant at which a window started at `start` no longer counts.
	pub fn resets_at(self, start: TimestampMs, window_ms: TimestampMs) -> TimestampMs {
		match self {
			Self::Rolling => start.saturating_add(window_ms),
			Self::Aligned => Self::Aligned
				.window_start(start, window_ms)
				.saturating_add(window_ms),
		}
	}

	/// Windows are half-open: `[start, resets_at)`.
	pub fn is_expired(self, start: TimestampMs, now: TimestampMs, window_ms: TimestampMs) -> bool {
		now >= self.resets_at(start, window_ms)
	}
}
