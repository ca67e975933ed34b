use tracing::trace;

use crate::HistoryError;

/// Ordered versions of one image plus the cursor of the displayed version.
///
/// Index 0 is the unedited base image and each later index is one applied
/// edit, so the cursor doubles as the edit count of the displayed version.
/// The cursor is `None` exactly when there are no states.
#[derive(Debug, Clone)]
pub struct EditHistory<S> {
	states: Vec<S>,
	cursor: Option<usize>,
}

impl<S> Default for EditHistory<S> {
	fn default() -> Self {
		Self {
			states: Vec::new(),
			cursor: None,
		}
	}
}

impl<S> EditHistory<S> {
	/// Creates an empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the whole history with a single base state.
	pub fn reset(&mut self, initial: S) {
		trace!(dropped = self.states.len(), "history reset");
		self.states.clear();
		self.states.push(initial);
		self.cursor = Some(0);
	}

	/// Appends a new version after the cursor and moves onto it.
	///
	/// States forward of the cursor (left behind by undo) are discarded first
	/// and can no longer be redone.
	pub fn commit(&mut self, state: S) -> Result<(), HistoryError> {
		let cursor = self.cursor.ok_or(HistoryError::Empty)?;
		let keep = cursor + 1;
		if self.states.len() > keep {
			trace!(truncated = self.states.len() - keep, "redo branch discarded");
			self.states.truncate(keep);
		}
		self.states.push(state);
		self.cursor = Some(keep);
		trace!(cursor = keep, len = self.states.len(), "history commit");
		Ok(())
	}

	/// Steps back one version and returns it.
	pub fn undo(&mut self) -> Result<&S, HistoryError> {
		match self.cursor {
			Some(cursor) if cursor > 0 => {
				self.cursor = Some(cursor - 1);
				trace!(cursor = cursor - 1, len = self.states.len(), "undo");
				Ok(&self.states[cursor - 1])
			}
			_ => {
				trace!("undo: nothing to undo");
				Err(HistoryError::NothingToUndo)
			}
		}
	}

	/// Steps forward one version and returns it.
	pub fn redo(&mut self) -> Result<&S, HistoryError> {
		match self.cursor {
			Some(cursor) if cursor + 1 < self.states.len() => {
				self.cursor = Some(cursor + 1);
				trace!(cursor = cursor + 1, len = self.states.len(), "redo");
				Ok(&self.states[cursor + 1])
			}
			_ => {
				trace!("redo: nothing to redo");
				Err(HistoryError::NothingToRedo)
			}
		}
	}

	/// Returns the displayed version, if any image is loaded.
	pub fn current(&self) -> Option<&S> {
		self.cursor.map(|cursor| &self.states[cursor])
	}

	/// Number of edits applied to the base image in the displayed version.
	pub fn edit_count(&self) -> usize {
		self.cursor.unwrap_or(0)
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn can_undo(&self) -> bool {
		self.cursor.is_some_and(|cursor| cursor > 0)
	}

	pub fn can_redo(&self) -> bool {
		self.cursor.is_some_and(|cursor| cursor + 1 < self.states.len())
	}

	/// Total number of stored versions, including any redo branch.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Iterates stored versions from the base image forward.
	pub fn states(&self) -> impl ExactSizeIterator<Item = &S> {
		self.states.iter()
	}
}
