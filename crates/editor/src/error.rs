use retouch_quota::QuotaError;
use thiserror::Error;

use crate::CollaboratorError;

/// Errors returned by [`EditSession`](crate::EditSession).
#[derive(Debug, Error)]
pub enum SessionError {
	/// The generation quota for the current window is used up.
	#[error("generation limit of {limit} reached, try again after the quota resets")]
	QuotaExceeded { limit: u32 },

	/// The displayed image already carries the maximum number of edits.
	#[error("edit limit of {limit} reached for this image")]
	EditLimitExceeded { limit: usize },

	/// An edit was requested before any image was loaded.
	#[error("no image loaded")]
	NoImage,

	#[error("edit instruction is empty")]
	EmptyInstruction,

	#[error("image provider failed: {0}")]
	Collaborator(#[from] CollaboratorError),

	#[error(transparent)]
	Quota(#[from] QuotaError),
}

impl SessionError {
	/// Returns `true` for limit rejections, which are shown to the user and
	/// are not worth retrying.
	pub fn is_policy_rejection(&self) -> bool {
		matches!(self, Self::QuotaExceeded { .. } | Self::EditLimitExceeded { .. })
	}
}
