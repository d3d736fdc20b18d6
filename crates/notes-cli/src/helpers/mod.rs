//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Line-based reading from stdin or a script (`input`)
//! - Position parsing for the delete screen (`parsing`)

mod input;
mod parsing;

// Re-export public API
#[cfg(test)]
pub use input::ScriptedInput;
pub use input::{LineSource, StdinLines};
pub use parsing::parse_position;
