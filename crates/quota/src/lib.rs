//! Persisted quota counter with read-time window reset.
//!
//! The [`QuotaTracker`] never trusts an in-memory copy of its record: every
//! query and every mutation re-reads the [`QuotaStore`], re-validates the
//! window, and writes a fresh record back when the stored one is missing,
//! corrupt, or expired. Storage is authoritative, so independent processes
//! sharing one store agree on the count (modulo racing increments).

mod config;
mod error;
mod record;
mod store;
mod tracker;
mod window;

pub use config::QuotaConfig;
pub use error::QuotaError;
pub use record::QuotaRecord;
pub use store::{FileStore, MemoryStore, QuotaStore};
pub use tracker::{QuotaStatus, QuotaTracker};
pub use window::{DEFAULT_WINDOW_MS, MAX_FUTURE_SKEW_MS, WindowPolicy};
