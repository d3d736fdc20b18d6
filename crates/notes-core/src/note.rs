//! Note records and their single-line text form.
//!
//! A note is stored as one line:
//!
//! ```text
//! "  tag1, tag2  " + "| dd.mm.yyyy | " + text
//! ```
//!
//! Both prefixes are optional. In memory the segments are kept apart in a
//! [`Note`]; they are joined by [`Note::to_line`] and split again by
//! [`Note::from_line`] at the storage boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

/// Padding on both sides of the tag segment.
const TAG_PAD: &str = "  ";
/// Separator between tags in the rendered segment.
const TAG_SEPARATOR: &str = ", ";
const DATE_OPEN: &str = "| ";
const DATE_CLOSE: &str = " | ";

/// A day/month/year triple entered by the user.
///
/// Bounds are checked per field only (day 1-31, month 1-12, year >= 1);
/// there is no calendar validation, so `31.02.2025` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteDate {
    day: u8,
    month: u8,
    year: u64,
}

impl NoteDate {
    /// Build a date, checking each field's bounds.
    pub fn new(day: i64, month: i64, year: i64) -> Result<Self, DateError> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year < 1 {
            return Err(DateError::Values);
        }
        Ok(Self {
            day: day as u8,
            month: month as u8,
            year: year as u64,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u64 {
        self.year
    }
}

impl FromStr for NoteDate {
    type Err = DateError;

    /// Parse `integer.integer.integer` as day, month, year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(DateError::Format);
        }

        let mut values = [0i64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| DateError::Values)?;
        }

        Self::new(values[0], values[1], values[2])
    }
}

impl fmt::Display for NoteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// A single note: optional tags, optional date, and free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Note {
    tags: Vec<String>,
    date: Option<NoteDate>,
    text: String,
}

impl Note {
    /// Create an untagged, undated note.
    ///
    /// Line breaks in `text` are replaced with spaces so the note always
    /// occupies exactly one stored line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            tags: Vec::new(),
            date: None,
            text: single_line(&text.into()),
        }
    }

    /// Attach tags. Each value is run through [`parse_tags`], so commas split
    /// further tags and blank values are dropped.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .flat_map(|tag| parse_tags(tag.as_ref()))
            .collect();
        self
    }

    pub fn with_date(mut self, date: Option<NoteDate>) -> Self {
        self.date = date;
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn date(&self) -> Option<NoteDate> {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render the stored single-line form: tags, then date, then text.
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        if !self.tags.is_empty() {
            line.push_str(TAG_PAD);
            line.push_str(&self.tags.join(TAG_SEPARATOR));
            line.push_str(TAG_PAD);
        }
        if let Some(date) = self.date {
            line.push_str(DATE_OPEN);
            line.push_str(&date.to_string());
            line.push_str(DATE_CLOSE);
        }
        line.push_str(&self.text);
        line
    }

    /// Read a stored line back into a note.
    ///
    /// The structured reading is only kept when it renders back to exactly
    /// `line`; anything else becomes a plain note holding the whole line, so
    /// `Note::from_line(l).to_line() == l` for every `l` without `\n` or `\r`.
    /// A stray `\r` inside a line is turned into a space, like in
    /// [`Note::new`].
    pub fn from_line(line: &str) -> Self {
        let line = single_line(line);
        match parse_segments(&line) {
            Some(note) if note.to_line() == line => note,
            _ => Self {
                tags: Vec::new(),
                date: None,
                text: line,
            },
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Split a comma-separated tag string into normalized tags.
///
/// Blank input means no tags. Otherwise every comma separates a tag, so each
/// separator renders as `", "`. Tags are trimmed and inner whitespace runs
/// collapse to one space; empty tags are kept: `"work,  big idea ,,x"`
/// becomes `["work", "big idea", "", "x"]`.
pub fn parse_tags(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(normalize_tag).collect()
}

fn normalize_tag(tag: &str) -> String {
    tag.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn single_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

fn parse_segments(line: &str) -> Option<Note> {
    let mut rest = line;
    let mut tags = Vec::new();

    if let Some(after) = rest.strip_prefix(TAG_PAD) {
        let end = after.find(TAG_PAD)?;
        let segment = &after[..end];
        if segment.is_empty() {
            return None;
        }
        for tag in segment.split(TAG_SEPARATOR) {
            if normalize_tag(tag) != tag || tag.contains(',') {
                return None;
            }
            tags.push(tag.to_string());
        }
        rest = &after[end + TAG_PAD.len()..];
    }

    let mut date = None;
    if let Some(after) = rest.strip_prefix(DATE_OPEN) {
        if let Some(end) = after.find(DATE_CLOSE) {
            if let Ok(parsed) = after[..end].parse::<NoteDate>() {
                date = Some(parsed);
                rest = &after[end + DATE_CLOSE.len()..];
            }
        }
    }

    Some(Note {
        tags,
        date,
        text: rest.to_string(),
    })
}
