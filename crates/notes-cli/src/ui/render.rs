//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};
use notes_core::Note;

use super::context::UiContext;
use super::format::{date_cell, position, tags_cell};
use super::theme::{styled, styles, Badge};

/// Render a header line for a screen.
///
/// Pretty mode: "Notes · screen (context)"
/// Plain mode: "notestool screen"
pub fn header(ctx: &UiContext, screen: &str, context: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("Notes", styles::bold(), ctx.color);
        match context {
            Some(c) => format!("{} \u{00B7} {} ({})", title, screen, c),
            None => format!("{} \u{00B7} {}", title, screen),
        }
    } else {
        format!("notestool {}", screen)
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    let line = if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(46))
    } else {
        "-".repeat(ctx.width.min(46))
    };
    styled(&line, styles::frame(), ctx.color)
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let label = styled("Hint:", styles::dim(), ctx.color);
    format!("{} {}", label, text)
}

/// Render a prompt asking the user for input.
pub fn prompt(ctx: &UiContext, text: &str) -> String {
    styled(text, styles::prompt(), ctx.color)
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = vec![badge(ctx, Badge::Err, message)];
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }
    lines.join("\n")
}

/// Render numbered notes as a table.
///
/// `rows` pairs each note with its 1-based position in the full list, so a
/// page from the middle of a collection keeps its real numbers.
///
/// Pretty mode: bordered table with ID, Tags, Date, and Note columns
/// Plain mode: one `id | tags | date | note` line per note
pub fn note_table(ctx: &UiContext, rows: &[(usize, &Note)]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_FULL);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);

        let header_cells: Vec<Cell> = ["ID", "Tags", "Date", "Note"]
            .into_iter()
            .map(|h| {
                let mut cell = Cell::new(h);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Bold);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for (pos, note) in rows {
            table.add_row(vec![
                position(*pos),
                tags_cell(note.tags()),
                date_cell(note.date()),
                note.text().to_string(),
            ]);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|(pos, note)| {
                format!(
                    "{} | {} | {} | {}",
                    position(*pos),
                    tags_cell(note.tags()),
                    date_cell(note.date()),
                    note.text()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
