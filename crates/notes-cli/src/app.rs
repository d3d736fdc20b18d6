//! The interactive session for one collection.
//!
//! A session loads the collection once and then loops over the main menu.
//! The note list lives here and is replaced by whatever each command
//! returns.

use log::{debug, info};
use notes_core::{Note, NoteStore};

use crate::commands::{add_note, delete_note, load_or_empty, show_notes};
use crate::helpers::parse_position;
use crate::ui::{badge, Badge, Console, Menu};

const MENU_TITLE: &str = "Welcome to Notes Tool";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Show,
    Add,
    Delete,
    Exit,
}

impl MainMenu {
    pub const ALL: [MainMenu; 4] = [
        MainMenu::Show,
        MainMenu::Add,
        MainMenu::Delete,
        MainMenu::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenu::Show => "Show notes",
            MainMenu::Add => "Add a note",
            MainMenu::Delete => "Delete a note",
            MainMenu::Exit => "Exit",
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(MainMenu::Exit)
    }
}

/// Session state: where notes are stored and the current list.
pub struct Session<'a> {
    store: &'a dyn NoteStore,
    collection: String,
    notes: Vec<Note>,
    page_size: usize,
}

impl<'a> Session<'a> {
    /// Open `collection`. Load failures are reported and start an empty list.
    pub fn open(
        console: &mut Console<'_>,
        store: &'a dyn NoteStore,
        collection: impl Into<String>,
        page_size: usize,
    ) -> Self {
        let collection = collection.into();
        let notes = load_or_empty(console, store, &collection);
        info!("opened collection {} with {} notes", collection, notes.len());
        Self {
            store,
            collection,
            notes,
            page_size,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Run the main menu until Exit is chosen or input ends.
    pub fn run(&mut self, console: &mut Console<'_>) {
        let labels: Vec<&str> = MainMenu::ALL.iter().map(|entry| entry.label()).collect();
        let mut menu = Menu::new(MENU_TITLE, &labels);

        loop {
            let Some(index) = menu.run(console) else {
                debug!("input ended at the main menu");
                return;
            };
            let keep_going = match MainMenu::from_index(index) {
                MainMenu::Show => self.show(console),
                MainMenu::Add => self.add(console),
                MainMenu::Delete => self.delete(console),
                MainMenu::Exit => false,
            };
            if !keep_going {
                return;
            }
        }
    }

    fn show(&mut self, console: &mut Console<'_>) -> bool {
        console.clear();
        show_notes(console, &self.collection, &self.notes, self.page_size);
        console.pause()
    }

    fn add(&mut self, console: &mut Console<'_>) -> bool {
        let Some(raw_text) = console.ask("\nEnter the note text:") else {
            return false;
        };
        self.notes = add_note(console, self.store, &self.collection, &self.notes, &raw_text);
        console.pause()
    }

    fn delete(&mut self, console: &mut Console<'_>) -> bool {
        console.clear();
        show_notes(console, &self.collection, &self.notes, self.page_size);
        let Some(answer) = console.ask("\nEnter the number of note to remove or 0 to cancel:")
        else {
            return false;
        };
        match parse_position(&answer) {
            Ok(position) => {
                self.notes = delete_note(
                    console,
                    self.store,
                    &self.collection,
                    &self.notes,
                    position,
                );
            }
            Err(err) => {
                let message = badge(console.ctx(), Badge::Err, &err.to_string());
                console.say(&message);
            }
        }
        console.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ScriptedInput;
    use crate::ui::UiContext;
    use notes_core::storage::MemoryStore;

    fn run_session(store: &MemoryStore, lines: &[&str]) -> (Vec<Note>, String, usize) {
        let ctx = UiContext::plain();
        let mut input = ScriptedInput::new(lines);
        let mut out = Vec::new();
        let notes = {
            let mut console = Console::new(&ctx, &mut input, &mut out);
            let mut session = Session::open(&mut console, store, "notes", 20);
            session.run(&mut console);
            session.notes().to_vec()
        };
        (notes, String::from_utf8(out).unwrap(), input.remaining())
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<_> = MainMenu::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Show notes", "Add a note", "Delete a note", "Exit"]);
    }

    #[test]
    fn test_exit_by_number_stops_reading() {
        let store = MemoryStore::new();
        let (_, _, remaining) = run_session(&store, &["4", "unused"]);
        assert_eq!(remaining, 1);
    }

    #[test]
    fn test_add_then_show_then_exit() {
        let store = MemoryStore::new();
        let mut lines = vec!["2", "buy milk", "18.08.2025", "home", ""];
        lines.extend(["1", ""]);
        // Up from the first entry wraps to Exit.
        lines.extend(["w", ""]);
        let (notes, out, remaining) = run_session(&store, &lines);
        assert_eq!(remaining, 0);
        assert_eq!(notes.len(), 1);
        assert_eq!(
            store.lines("notes"),
            Some(vec!["  home  | 18.08.2025 | buy milk".to_string()])
        );
        assert!(out.contains("001 | home | 18.08.2025 | buy milk"));
    }

    #[test]
    fn test_delete_flow() {
        let seeded = [Note::new("a"), Note::new("b"), Note::new("c")];
        let store = MemoryStore::new().with_collection("notes", &seeded);
        let (notes, _, _) = run_session(&store, &["3", "2", "", "4"]);
        assert_eq!(notes, vec![Note::new("a"), Note::new("c")]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_delete_with_non_number_returns_to_menu() {
        let store = MemoryStore::new().with_collection("notes", &[Note::new("a")]);
        let (notes, out, _) = run_session(&store, &["3", "two", "", "4"]);
        assert_eq!(notes, vec![Note::new("a")]);
        assert!(out.contains("Invalid input, must be a number"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let store = MemoryStore::new();
        let (notes, _, _) = run_session(&store, &["2"]);
        assert!(notes.is_empty());
        assert_eq!(store.save_count(), 0);
    }
}
