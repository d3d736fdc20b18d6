//! UI primitives for the notestool CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens, color styles, symbols
//! - **Render**: Headers, badges, hints, note tables
//! - **Format**: Cell formatting (positions, dates, tags)
//! - **Console**: Prompt/answer plumbing over a line source
//! - **Menu**: The highlight-and-confirm selection loop
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{Console, Menu, UiContext};
//!
//! let ctx = UiContext::from_env(cli.no_color, cli.ascii);
//! let mut console = Console::new(&ctx, &mut input, &mut stdout);
//! let choice = Menu::new("Notes Tool", &["Show", "Exit"]).run(&mut console);
//! ```

mod console;
mod context;
pub mod format;
pub mod menu;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use console::Console;
pub use context::UiContext;
pub use menu::Menu;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, error_message, header, kv, note_table};
