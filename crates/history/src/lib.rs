//! Linear undo/redo history over opaque image states.
//!
//! [`EditHistory`] keeps every committed version of the current image and a
//! cursor naming the displayed one. Undo and redo only move the cursor; a
//! commit made after an undo discards the forward branch before appending,
//! so at most one edit path exists per image.
//!
//! ```text
//! reset(A)  commit(B)  commit(C)  undo()     commit(D)
//! [A]       [A B]      [A B C]    [A B C]    [A B D]
//!  ^           ^            ^        ^            ^
//! ```

mod error;
mod history;

pub use error::HistoryError;
pub use history::EditHistory;
