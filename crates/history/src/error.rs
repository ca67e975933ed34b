use thiserror::Error;

/// Errors returned by [`EditHistory`](crate::EditHistory) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
	/// The operation needs a base image but the history is empty.
	#[error("history is empty: load an image first")]
	Empty,

	/// Undo requested at the oldest state.
	#[error("nothing to undo")]
	NothingToUndo,

	/// Redo requested at the newest state.
	#[error("nothing to redo")]
	NothingToRedo,
}

impl HistoryError {
	/// Returns `true` for boundary no-ops, which callers should swallow
	/// instead of reporting as failures.
	pub fn is_noop(self) -> bool {
		matches!(self, Self::NothingToUndo | Self::NothingToRedo)
	}
}
