//! List operations over a collection's notes.
//!
//! Every operation builds a new, independently owned `Vec`; the input slice
//! is never modified or reused.

use crate::note::Note;

/// Result of removing a note by its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Position 0 was given; nothing changes.
    Cancelled,
    /// Position is outside `1..=len`.
    OutOfRange { position: i64, len: usize },
    /// The note was removed; `notes` is the remaining list.
    Removed { notes: Vec<Note>, removed: Note },
}

/// Return a new list with `note` appended.
pub fn append(notes: &[Note], note: Note) -> Vec<Note> {
    let mut next = Vec::with_capacity(notes.len() + 1);
    next.extend_from_slice(notes);
    next.push(note);
    next
}

/// Remove the note at 1-based `position`.
pub fn remove_at(notes: &[Note], position: i64) -> Removal {
    if position == 0 {
        return Removal::Cancelled;
    }

    let index = match usize::try_from(position) {
        Ok(p) if p <= notes.len() => p - 1,
        _ => {
            return Removal::OutOfRange {
                position,
                len: notes.len(),
            }
        }
    };

    let removed = notes[index].clone();
    let remaining = notes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, note)| note.clone())
        .collect();

    Removal::Removed {
        notes: remaining,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(texts: &[&str]) -> Vec<Note> {
        texts.iter().map(|t| Note::new(*t)).collect()
    }

    #[test]
    fn test_append_leaves_input_untouched() {
        let before = notes(&["a", "b"]);
        let after = append(&before, Note::new("c"));
        assert_eq!(before, notes(&["a", "b"]));
        assert_eq!(after, notes(&["a", "b", "c"]));
    }

    #[test]
    fn test_append_to_empty() {
        assert_eq!(append(&[], Note::new("x")), notes(&["x"]));
    }

    #[test]
    fn test_remove_middle() {
        let list = notes(&["a", "b", "c"]);
        match remove_at(&list, 2) {
            Removal::Removed { notes: rest, removed } => {
                assert_eq!(rest, notes(&["a", "c"]));
                assert_eq!(removed, Note::new("b"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(list, notes(&["a", "b", "c"]));
    }

    #[test]
    fn test_remove_first_and_last() {
        let list = notes(&["a", "b", "c"]);
        assert!(matches!(
            remove_at(&list, 1),
            Removal::Removed { ref notes, .. } if notes.len() == 2 && notes[0].text() == "b"
        ));
        assert!(matches!(
            remove_at(&list, 3),
            Removal::Removed { ref notes, .. } if notes.len() == 2 && notes[1].text() == "b"
        ));
    }

    #[test]
    fn test_remove_zero_cancels() {
        assert_eq!(remove_at(&notes(&["a"]), 0), Removal::Cancelled);
    }

    #[test]
    fn test_remove_out_of_range() {
        let list = notes(&["a", "b", "c"]);
        assert_eq!(
            remove_at(&list, 4),
            Removal::OutOfRange {
                position: 4,
                len: 3
            }
        );
        assert_eq!(
            remove_at(&list, -1),
            Removal::OutOfRange {
                position: -1,
                len: 3
            }
        );
        assert_eq!(
            remove_at(&[], 1),
            Removal::OutOfRange {
                position: 1,
                len: 0
            }
        );
    }
}
