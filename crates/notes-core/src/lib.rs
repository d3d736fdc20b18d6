//! # Notes Core
//!
//! Core library for notestool - a small, menu-driven personal note manager
//! that keeps notes in named collections on disk.
//!
//! This crate provides the note model, the on-disk codec, storage
//! abstractions, and list operations independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **cipher**: ROT13 line obfuscation (not encryption)
//! - **note**: Note records, dates, and tag normalization
//! - **storage**: Storage trait plus file and in-memory backends
//! - **notebook**: Append/remove operations that always return fresh lists

pub mod cipher;
pub mod error;
pub mod note;
pub mod notebook;
pub mod storage;

pub use error::{NotesError, Result};
pub use note::{Note, NoteDate};
pub use notebook::Removal;
pub use storage::NoteStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
