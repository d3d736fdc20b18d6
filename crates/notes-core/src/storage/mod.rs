//! Storage abstraction for note collections.
//!
//! ## Architecture
//!
//! - `FileStore`: one plain text file per collection, one ROT13-encoded note
//!   per line
//! - `MemoryStore`: in-process map, for headless runs and tests
//!
//! Both implement `NoteStore`. Stores return structured errors; deciding
//! whether a failure degrades to an empty list or is only reported is left
//! to the caller.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::NoteStore;
