//! Screens behind the main menu entries.
//!
//! Each command takes the session's current list and returns the list the
//! session should continue with. Storage failures never end the session:
//! they are logged, reported on screen, and the in-memory list is kept.

mod add;
mod delete;
mod show;

pub use add::add_note;
pub use delete::delete_note;
pub use show::show_notes;

use log::error;
use notes_core::{Note, NoteStore};

use crate::ui::{error_message, Console};

/// Load `collection`, falling back to an empty list on failure.
pub fn load_or_empty(
    console: &mut Console<'_>,
    store: &dyn NoteStore,
    collection: &str,
) -> Vec<Note> {
    match store.load(collection) {
        Ok(notes) => notes,
        Err(err) => {
            error!("failed to load collection {}: {}", collection, err);
            let message = error_message(
                console.ctx(),
                &format!("Could not read notes: {}", err),
                Some("Starting with an empty list."),
            );
            console.say(&message);
            Vec::new()
        }
    }
}

/// Write the full list for `collection`. Returns whether the write succeeded.
pub(crate) fn persist(
    console: &mut Console<'_>,
    store: &dyn NoteStore,
    collection: &str,
    notes: &[Note],
) -> bool {
    match store.save(collection, notes) {
        Ok(()) => true,
        Err(err) => {
            error!("failed to save collection {}: {}", collection, err);
            let message = error_message(
                console.ctx(),
                &format!("Could not save notes: {}", err),
                None,
            );
            console.say(&message);
            false
        }
    }
}
