use std::sync::Arc;

use retouch_history::EditHistory;
use retouch_primitives::{Clock, ImagePayload};
use retouch_quota::{QuotaStatus, QuotaTracker};
use tracing::{debug, trace, warn};

use crate::{CollaboratorError, ImageCollaborator, SessionConfig, SessionError};

/// One user's image editing session.
///
/// Mutating calls take `&mut self`, so while a provider call is in flight
/// no other edit, undo, redo, or generation can touch the same history or
/// quota record.
pub struct EditSession<C> {
	history: EditHistory<ImagePayload>,
	quota: QuotaTracker,
	collaborator: C,
	max_edits: usize,
}

impl<C: ImageCollaborator> EditSession<C> {
	pub fn new(collaborator: C, quota: QuotaTracker, max_edits: usize) -> Self {
		Self {
			history: EditHistory::new(),
			quota,
			collaborator,
			max_edits,
		}
	}

	/// Builds a session with a file-backed quota from `config`.
	pub fn open(collaborator: C, config: &SessionConfig, clock: Arc<dyn Clock>) -> Result<Self, SessionError> {
		let quota = QuotaTracker::open(&config.quota, clock)?;
		Ok(Self::new(collaborator, quota, config.max_edits))
	}

	/// Starts a new history from an upload. Uploading is free; only
	/// [`generate`](Self::generate) consumes quota.
	pub fn load(&mut self, image: ImagePayload) {
		debug!(image = ?image, "image loaded");
		self.history.reset(image);
	}

	/// Generates a new base image from `source`, consuming one unit of quota.
	///
	/// The quota is committed only after the provider succeeds, and the
	/// result replaces the whole edit history.
	pub async fn generate(&mut self, source: ImagePayload) -> Result<ImagePayload, SessionError> {
		if !self.quota.can_consume()? {
			debug!(limit = self.quota.limit(), "generation rejected: quota exhausted");
			return Err(SessionError::QuotaExceeded {
				limit: self.quota.limit(),
			});
		}

		let result = self.collaborator.generate(&source).await;
		let image = accept(result)?;

		let count = self.quota.consume()?;
		self.history.reset(image.clone());
		debug!(count, limit = self.quota.limit(), image = ?image, "generation committed");
		Ok(image)
	}

	/// Applies `instruction` to the displayed image and commits the result,
	/// discarding any redo branch.
	pub async fn edit(&mut self, instruction: &str) -> Result<ImagePayload, SessionError> {
		let Some(current) = self.history.current().cloned() else {
			return Err(SessionError::NoImage);
		};
		if self.history.edit_count() >= self.max_edits {
			debug!(limit = self.max_edits, "edit rejected: edit limit reached");
			return Err(SessionError::EditLimitExceeded {
				limit: self.max_edits,
			});
		}
		let instruction = instruction.trim();
		if instruction.is_empty() {
			return Err(SessionError::EmptyInstruction);
		}

		let result = self.collaborator.edit(&current, instruction).await;
		let image = accept(result)?;

		self.history
			.commit(image.clone())
			.map_err(|_| SessionError::NoImage)?;
		debug!(edits = self.history.edit_count(), image = ?image, "edit committed");
		Ok(image)
	}

	/// Steps back one version. Returns `None` at the oldest version.
	pub fn undo(&mut self) -> Option<ImagePayload> {
		self.history.undo().ok().cloned()
	}

	/// Steps forward one version. Returns `None` at the newest version.
	pub fn redo(&mut self) -> Option<ImagePayload> {
		self.history.redo().ok().cloned()
	}

	pub fn current(&self) -> Option<&ImagePayload> {
		self.history.current()
	}

	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	pub fn edit_count(&self) -> usize {
		self.history.edit_count()
	}

	pub fn max_edits(&self) -> usize {
		self.max_edits
	}

	/// Edits still allowed on the displayed version.
	pub fn remaining_edits(&self) -> usize {
		self.max_edits.saturating_sub(self.history.edit_count())
	}

	pub fn can_generate(&self) -> Result<bool, SessionError> {
		Ok(self.quota.can_consume()?)
	}

	pub fn quota_status(&self) -> Result<QuotaStatus, SessionError> {
		Ok(self.quota.status()?)
	}

	pub fn history(&self) -> &EditHistory<ImagePayload> {
		&self.history
	}
}

fn accept(result: Result<ImagePayload, CollaboratorError>) -> Result<ImagePayload, SessionError> {
	match result {
		Ok(image) if image.is_empty() => {
			warn!("provider returned an empty image");
			Err(CollaboratorError::EmptyResponse.into())
		}
		Ok(image) => {
			trace!(image = ?image, "provider call succeeded");
			Ok(image)
		}
		Err(error) => {
			warn!(%error, "provider call failed");
			Err(error.into())
		}
	}
}
