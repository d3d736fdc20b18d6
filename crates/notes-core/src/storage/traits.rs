//! Storage trait definition.
//!
//! The `NoteStore` trait defines how a named collection is read and written.
//! The CLI only talks to this trait, so tests and headless runs can swap the
//! filesystem for memory.

use crate::error::Result;
use crate::note::Note;

/// Storage interface for note collections.
///
/// All implementations must ensure:
/// - A collection that was never written loads as an empty list
/// - `save` replaces the whole collection; there is no partial update
/// - Notes come back in the order they were saved
pub trait NoteStore {
    /// Load every note in `collection`, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the collection exists but cannot be
    /// opened or read. A missing collection is not an error.
    fn load(&self, collection: &str) -> Result<Vec<Note>>;

    /// Replace the contents of `collection` with `notes`.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the collection cannot be created,
    /// written, or flushed. The store may be left truncated in that case.
    fn save(&self, collection: &str, notes: &[Note]) -> Result<()>;
}
