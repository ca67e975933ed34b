use std::io;

use thiserror::Error;

/// Errors surfaced by the quota tracker.
///
/// Read failures are deliberately absent: an unreadable record is treated
/// like a missing one and replaced with a fresh window.
#[derive(Debug, Error)]
pub enum QuotaError {
	/// The record could not be written back to storage.
	#[error("failed to persist quota record: {0}")]
	Write(#[source] io::Error),

	/// The record could not be serialized.
	#[error("failed to encode quota record: {0}")]
	Encode(#[source] serde_json::Error),

	/// Stored bytes did not parse as a record.
	#[error("malformed quota record: {0}")]
	Decode(#[source] serde_json::Error),

	/// No platform data directory to hold the record file.
	#[error("no local data directory available for the quota record")]
	NoDataDir,
}
