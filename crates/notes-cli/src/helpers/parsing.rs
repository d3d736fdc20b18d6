//! Parsing helpers for typed user input.

/// Parse a note position typed on the delete screen.
///
/// Any integer is accepted here, including 0 (cancel) and values outside the
/// list; range checks happen when the note is removed.
pub fn parse_position(value: &str) -> anyhow::Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid input, must be a number"))
}
