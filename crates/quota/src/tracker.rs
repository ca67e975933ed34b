use std::sync::Arc;

use retouch_primitives::{Clock, TimestampMs};
use tracing::{debug, warn};

use crate::{FileStore, MAX_FUTURE_SKEW_MS, QuotaConfig, QuotaError, QuotaRecord, QuotaStore, WindowPolicy};

/// Snapshot of the current window for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaStatus {
	pub used: u32,
	pub limit: u32,
	pub remaining: u32,
	/// When the current window stops counting.
	pub resets_at_ms: TimestampMs,
}

/// Durable per-window consumption counter.
///
/// There is no timer: each accessor re-reads the store and resets an
/// expired, missing, or corrupt record on the spot. Two processes crossing
/// the boundary together may both reset, which lands on the same zero state.
///
/// [`consume`](Self::consume) is a plain read-modify-write without a lock,
/// so concurrent processes can under-count by the number of racing writers.
pub struct QuotaTracker {
	store: Box<dyn QuotaStore>,
	clock: Arc<dyn Clock>,
	limit: u32,
	window_ms: TimestampMs,
	policy: WindowPolicy,
}

impl QuotaTracker {
	pub fn new(store: impl QuotaStore + 'static, clock: Arc<dyn Clock>, config: &QuotaConfig) -> Self {
		Self {
			store: Box::new(store),
			clock,
			limit: config.limit,
			window_ms: config.window_ms.max(1),
			policy: config.policy,
		}
	}

	/// Opens a file-backed tracker at the configured or default path.
	pub fn open(config: &QuotaConfig, clock: Arc<dyn Clock>) -> Result<Self, QuotaError> {
		let path = match &config.path {
			Some(path) => path.clone(),
			None => FileStore::default_path().ok_or(QuotaError::NoDataDir)?,
		};
		debug!(path = %path.display(), "opening quota record");
		Ok(Self::new(FileStore::new(path), clock, config))
	}

	pub fn limit(&self) -> u32 {
		self.limit
	}

	/// Returns the stored record, replacing it with a fresh window when it is
	/// absent, unreadable, malformed, or expired.
	pub fn load_or_init(&self) -> Result<QuotaRecord, QuotaError> {
		let now = self.clock.now_ms();
		if let Some(record) = self.load_valid(now) {
			return Ok(record);
		}

		let fresh = QuotaRecord::fresh(self.policy.window_start(now, self.window_ms));
		self.persist(&fresh)?;
		debug!(window_start_ms = fresh.window_start_ms, "quota window opened");
		Ok(fresh)
	}

	pub fn current_count(&self) -> Result<u32, QuotaError> {
		Ok(self.load_or_init()?.count)
	}

	pub fn can_consume(&self) -> Result<bool, QuotaError> {
		Ok(self.load_or_init()?.count < self.limit)
	}

	/// Records one consumption and returns the new count.
	///
	/// Does not check the limit; callers consult [`can_consume`] first.
	///
	/// [`can_consume`]: Self::can_consume
	pub fn consume(&self) -> Result<u32, QuotaError> {
		let mut record = self.load_or_init()?;
		record.count = record.count.saturating_add(1);
		self.persist(&record)?;
		debug!(count = record.count, limit = self.limit, "quota consumed");
		Ok(record.count)
	}

	pub fn status(&self) -> Result<QuotaStatus, QuotaError> {
		let record = self.load_or_init()?;
		Ok(QuotaStatus {
			used: record.count,
			limit: self.limit,
			remaining: self.limit.saturating_sub(record.count),
			resets_at_ms: self.policy.resets_at(record.window_start_ms, self.window_ms),
		})
	}

	fn load_valid(&self, now: TimestampMs) -> Option<QuotaRecord> {
		let bytes = match self.store.read() {
			Ok(Some(bytes)) => bytes,
			Ok(None) => {
				debug!("no quota record stored");
				return None;
			}
			Err(error) => {
				warn!(%error, "quota record unreadable, starting a fresh window");
				return None;
			}
		};

		let record = match QuotaRecord::decode(&bytes) {
			Ok(record) => record,
			Err(error) => {
				warn!(%error, "quota record corrupt, starting a fresh window");
				return None;
			}
		};

		// A start further ahead than small skew would hold the window open
		// past its length on this clock.
		if record.window_start_ms > now.saturating_add(MAX_FUTURE_SKEW_MS) {
			warn!(window_start_ms = record.window_start_ms, now, "quota record starts in the future, discarding");
			return None;
		}

		if self.policy.is_expired(record.window_start_ms, now, self.window_ms) {
			debug!(window_start_ms = record.window_start_ms, count = record.count, "quota window expired");
			return None;
		}

		Some(record)
	}

	fn persist(&self, record: &QuotaRecord) -> Result<(), QuotaError> {
		let bytes = record.encode()?;
		self.store.write(&bytes).map_err(QuotaError::Write)
	}
}
