//! Edit session orchestration.
//!
//! [`EditSession`] sequences the two independent leaves, an
//! [`EditHistory`](retouch_history::EditHistory) of image versions and a
//! persisted [`QuotaTracker`](retouch_quota::QuotaTracker), around calls to
//! an external [`ImageCollaborator`]. It holds no invariants of its own:
//! limits are checked before the provider call and state is only committed
//! after the provider succeeds.

mod collaborator;
mod config;
mod error;
mod session;

pub use collaborator::{CollaboratorError, ImageCollaborator};
pub use config::{ConfigError, SessionConfig};
pub use error::SessionError;
pub use session::EditSession;
