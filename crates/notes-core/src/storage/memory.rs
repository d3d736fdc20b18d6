//! In-memory storage backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::traits::NoteStore;
use crate::error::{NotesError, Result};
use crate::note::Note;

/// Note store that keeps collections in a map.
///
/// Collections are kept as rendered lines, so a save/load cycle goes
/// through the same `to_line`/`from_line` path as the file store. The store
/// also counts saves and can be told to fail them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<String, Vec<String>>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `collection` with notes without counting a save.
    pub fn with_collection(self, collection: &str, notes: &[Note]) -> Self {
        self.collections.borrow_mut().insert(
            collection.to_string(),
            notes.iter().map(Note::to_line).collect(),
        );
        self
    }

    /// Number of successful and failed `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every following `save` return a storage error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Stored lines of `collection`, if it was ever written.
    pub fn lines(&self, collection: &str) -> Option<Vec<String>> {
        self.collections.borrow().get(collection).cloned()
    }
}

impl NoteStore for MemoryStore {
    fn load(&self, collection: &str) -> Result<Vec<Note>> {
        Ok(self
            .collections
            .borrow()
            .get(collection)
            .map(|lines| lines.iter().map(|line| Note::from_line(line)).collect())
            .unwrap_or_default())
    }

    fn save(&self, collection: &str, notes: &[Note]) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        if self.fail_saves.get() {
            return Err(NotesError::Storage(format!(
                "Failed to write {}: store is read-only",
                collection
            )));
        }
        self.collections.borrow_mut().insert(
            collection.to_string(),
            notes.iter().map(Note::to_line).collect(),
        );
        Ok(())
    }
}
