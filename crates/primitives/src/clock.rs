use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Milliseconds since the Unix epoch.
pub type TimestampMs = i64;

/// Source of wall-clock time.
///
/// Quota windows compare timestamps captured at read time. No monotonic
/// guarantee is required, so small skew between processes is tolerated.
pub trait Clock: Send + Sync {
	fn now_ms(&self) -> TimestampMs;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
	fn now_ms(&self) -> TimestampMs {
		(**self).now_ms()
	}
}

/// Reads the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_ms(&self) -> TimestampMs {
		chrono::Utc::now().timestamp_millis()
	}
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
	now: AtomicI64,
}

impl ManualClock {
	pub fn new(start: TimestampMs) -> Self {
		Self {
			now: AtomicI64::new(start),
		}
	}

	pub fn set(&self, now: TimestampMs) {
		self.now.store(now, Ordering::SeqCst);
	}

	/// Moves the clock forward (or backward, for negative `delta`).
	pub fn advance(&self, delta: TimestampMs) {
		self.now.fetch_add(delta, Ordering::SeqCst);
	}
}

impl Clock for ManualClock {
	fn now_ms(&self) -> TimestampMs {
		self.now.load(Ordering::SeqCst)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manual_clock_moves_only_when_told() {
		let clock = ManualClock::new(1_000);
		assert_eq!(clock.now_ms(), 1_000);
		clock.advance(500);
		assert_eq!(clock.now_ms(), 1_500);
		clock.set(-20);
		assert_eq!(clock.now_ms(), -20);
	}

	#[test]
	fn arc_clock_delegates() {
		let clock = Arc::new(ManualClock::new(7));
		let shared: Arc<dyn Clock> = clock.clone();
		clock.advance(3);
		assert_eq!(shared.now_ms(), 10);
	}

	#[test]
	fn system_clock_is_past_2020() {
		assert!(SystemClock.now_ms() > 1_577_836_800_000);
	}
}
