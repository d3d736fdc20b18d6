use log::debug;
use notes_core::notebook::remove_at;
use notes_core::{Note, NoteStore, Removal};

use super::persist;
use crate::ui::{badge, Badge, Console};

/// Remove the note at 1-based `position` and save the remaining list.
///
/// Position 0 cancels. Out-of-range positions leave the list untouched and
/// nothing is written.
pub fn delete_note(
    console: &mut Console<'_>,
    store: &dyn NoteStore,
    collection: &str,
    notes: &[Note],
    position: i64,
) -> Vec<Note> {
    match remove_at(notes, position) {
        Removal::Cancelled => {
            let message = badge(console.ctx(), Badge::Warn, "Canceled.");
            console.say(&message);
            notes.to_vec()
        }
        Removal::OutOfRange { position, len } => {
            debug!("position {} outside 1..={}", position, len);
            let message = badge(console.ctx(), Badge::Err, "Invalid note number.");
            console.say(&message);
            notes.to_vec()
        }
        Removal::Removed { notes, .. } => {
            if persist(console, store, collection, &notes) {
                let message = badge(console.ctx(), Badge::Ok, "Note removed.");
                console.say(&message);
            }
            notes
        }
    }
}
