//! Trackers in separate processes share one record file.

use std::sync::Arc;

use retouch_primitives::{Clock, ManualClock};
use retouch_quota::{QuotaConfig, QuotaTracker};

fn open(config: &QuotaConfig, clock: &Arc<ManualClock>) -> QuotaTracker {
	let clock: Arc<dyn Clock> = clock.clone();
	QuotaTracker::open(config, clock).unwrap()
}

#[test]
fn trackers_on_one_file_see_each_others_usage() {
	let dir = tempfile::tempdir().unwrap();
	let config = QuotaConfig {
		limit: 3,
		path: Some(dir.path().join("quota.json")),
		..QuotaConfig::default()
	};
	let clock = Arc::new(ManualClock::new(1_000));
	let first = open(&config, &clock);
	let second = open(&config, &clock);

	assert_eq!(first.consume().unwrap(), 1);
	assert_eq!(second.consume().unwrap(), 2);
	assert_eq!(first.current_count().unwrap(), 2);
	assert!(first.can_consume().unwrap());

	assert_eq!(second.consume().unwrap(), 3);
	assert!(!first.can_consume().unwrap());
	assert!(!second.can_consume().unwrap());
}

#[test]
fn both_trackers_reset_after_the_window() {
	let dir = tempfile::tempdir().unwrap();
	let config = QuotaConfig {
		limit: 1,
		path: Some(dir.path().join("quota.json")),
		..QuotaConfig::default()
	};
	let clock = Arc::new(ManualClock::new(0));
	let first = open(&config, &clock);
	let second = open(&config, &clock);

	first.consume().unwrap();
	assert!(!second.can_consume().unwrap());

	clock.set(config.window_ms);
	assert!(second.can_consume().unwrap());
	assert!(first.can_consume().unwrap());
	assert_eq!(first.current_count().unwrap(), 0);
}

#[test]
fn corrupt_file_is_replaced() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("quota.json");
	std::fs::write(&path, b"{\"count\": 2, \"window_start_ms\": ").unwrap();
	let config = QuotaConfig {
		path: Some(path.clone()),
		..QuotaConfig::default()
	};
	let clock = Arc::new(ManualClock::new(500));

	assert_eq!(open(&config, &clock).current_count().unwrap(), 0);
	assert_eq!(
		std::fs::read_to_string(&path).unwrap(),
		r#"{"count":0,"window_start_ms":500}"#
	);
}
