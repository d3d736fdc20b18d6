use notes_core::error::DateError;
use notes_core::notebook::append;
use notes_core::{Note, NoteDate, NoteStore};

use super::persist;
use crate::ui::{badge, Badge, Console};

const DATE_PROMPT: &str = "Enter date (optional, e.g. 18.08.2025). Leave empty to skip:";
const TAGS_PROMPT: &str = "Enter tags (optional, comma-separated). Leave empty to skip:";

/// Add a note built from `raw_text` plus an optional date and tags.
///
/// Blank text is rejected before any prompt. The returned list is the one
/// the session continues with; it includes the new note even if the save
/// failed. End of input during the prompts abandons the note.
pub fn add_note(
    console: &mut Console<'_>,
    store: &dyn NoteStore,
    collection: &str,
    notes: &[Note],
    raw_text: &str,
) -> Vec<Note> {
    let text = raw_text.trim();
    if text.is_empty() {
        let message = badge(console.ctx(), Badge::Err, "Empty note, not added.");
        console.say(&message);
        return notes.to_vec();
    }

    let Some(date) = ask_date(console) else {
        return notes.to_vec();
    };
    let Some(tags) = console.ask(TAGS_PROMPT) else {
        return notes.to_vec();
    };

    let note = Note::new(text).with_tags([&tags]).with_date(date);
    let next = append(notes, note);
    if persist(console, store, collection, &next) {
        let message = badge(console.ctx(), Badge::Ok, "Note added.");
        console.say(&message);
    }
    next
}

/// Prompt until the answer is empty or a valid `dd.mm.yyyy` date.
///
/// The outer `None` means input ended.
fn ask_date(console: &mut Console<'_>) -> Option<Option<NoteDate>> {
    loop {
        let answer = console.ask(DATE_PROMPT)?;
        if answer.is_empty() {
            return Some(None);
        }
        match answer.parse::<NoteDate>() {
            Ok(date) => return Some(Some(date)),
            Err(err) => {
                let text = match err {
                    DateError::Format => "Invalid format! Use dd.mm.yyyy",
                    DateError::Values => "Invalid values! Use dd.mm.yyyy",
                };
                let message = badge(console.ctx(), Badge::Err, text);
                console.say(&message);
            }
        }
    }
}
