//! String formatting utilities for UI rendering.

use notes_core::NoteDate;

use crate::constants::DATE_WIDTH;

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}

/// Format a 1-based note position as shown in listings ("001").
pub fn position(pos: usize) -> String {
    format!("{:03}", pos)
}

/// Format a note date, or a blank of the same width when absent.
pub fn date_cell(date: Option<NoteDate>) -> String {
    match date {
        Some(d) => pad_right(&d.to_string(), DATE_WIDTH),
        None => " ".repeat(DATE_WIDTH),
    }
}

/// Join tags for display.
pub fn tags_cell(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("hi", 5), "hi   ");
        assert_eq!(pad_right("hello", 3), "hello");
    }

    #[test]
    fn test_position() {
        assert_eq!(position(1), "001");
        assert_eq!(position(42), "042");
        assert_eq!(position(1234), "1234");
    }

    #[test]
    fn test_date_cell_placeholder_keeps_width() {
        assert_eq!(date_cell(None), "          ");
        let date = "1.2.2025".parse().ok();
        assert_eq!(date_cell(date), "01.02.2025");
        assert_eq!(date_cell(None).len(), date_cell(date).len());
    }

    #[test]
    fn test_tags_cell() {
        assert_eq!(tags_cell(&[]), "");
        assert_eq!(
            tags_cell(&["work".to_string(), "idea".to_string()]),
            "work, idea"
        );
    }
}
