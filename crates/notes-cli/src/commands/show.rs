use notes_core::Note;

use crate::ui::{badge, header, kv, note_table, Badge, Console};

const MORE_PROMPT: &str = "-- Enter for more, q to stop: ";

/// Print the numbered listing of `notes`, `page_size` rows at a time.
///
/// Between pages the user presses Enter to continue or `q` to stop. End of
/// input also stops the listing.
pub fn show_notes(
    console: &mut Console<'_>,
    collection: &str,
    notes: &[Note],
    page_size: usize,
) {
    let title = header(console.ctx(), "notes", Some(collection));
    console.say(&title);
    let name = kv(console.ctx(), "Collection", collection);
    console.say(&name);
    console.say("");

    if notes.is_empty() {
        let empty = badge(console.ctx(), Badge::Info, "No notes yet.");
        console.say(&empty);
        return;
    }

    let numbered: Vec<(usize, &Note)> = notes
        .iter()
        .enumerate()
        .map(|(i, note)| (i + 1, note))
        .collect();
    let mut pages = numbered.chunks(page_size.max(1)).peekable();
    while let Some(page) = pages.next() {
        let table = note_table(console.ctx(), page);
        console.say(&table);

        if pages.peek().is_none() {
            break;
        }
        match console.ask_inline(MORE_PROMPT) {
            Some(answer) if !answer.eq_ignore_ascii_case("q") => {}
            _ => break,
        }
    }
}
