//! Plain-file storage backend.
//!
//! Each collection is one UTF-8 text file. Every note is rendered with
//! [`Note::to_line`], passed through the ROT13 codec, and written on its own
//! `\n`-terminated line. There is no header and no metadata.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::traits::NoteStore;
use crate::cipher;
use crate::error::{NotesError, Result};
use crate::note::Note;

/// Filesystem-backed note store.
///
/// Without a base directory the collection name is used as the file path
/// as-is (relative names resolve against the working directory). With a
/// base directory, relative names resolve under it; absolute names are
/// never rebased.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    base_dir: Option<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    /// Path of the backing file for `collection`.
    pub fn path_for(&self, collection: &str) -> PathBuf {
        let name = Path::new(collection);
        match &self.base_dir {
            Some(dir) if name.is_relative() => dir.join(name),
            _ => name.to_path_buf(),
        }
    }
}

impl NoteStore for FileStore {
    fn load(&self, collection: &str) -> Result<Vec<Note>> {
        let path = self.path_for(collection);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("collection {} not found, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(NotesError::Storage(format!(
                    "Failed to open {}: {}",
                    path.display(),
                    err
                )))
            }
        };

        let mut notes = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| {
                NotesError::Storage(format!("Failed to read {}: {}", path.display(), e))
            })?;
            notes.push(Note::from_line(&cipher::decode(&line)));
        }

        debug!("loaded {} notes from {}", notes.len(), path.display());
        Ok(notes)
    }

    fn save(&self, collection: &str, notes: &[Note]) -> Result<()> {
        let path = self.path_for(collection);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                NotesError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(&path).map_err(|e| {
            NotesError::Storage(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        for note in notes {
            writeln!(writer, "{}", cipher::encode(&note.to_line())).map_err(|e| {
                NotesError::Storage(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        let file = writer.into_inner().map_err(|e| {
            NotesError::Storage(format!("Failed to flush {}: {}", path.display(), e.error()))
        })?;
        file.sync_all().map_err(|e| {
            NotesError::Storage(format!("Failed to sync {}: {}", path.display(), e))
        })?;

        debug!("saved {} notes to {}", notes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_for_without_base_dir() {
        let store = FileStore::new();
        assert_eq!(store.path_for("work_notes"), PathBuf::from("work_notes"));
    }

    #[test]
    fn test_path_for_relative_under_base_dir() {
        let store = FileStore::with_base_dir("/srv/notes");
        assert_eq!(
            store.path_for("ideas"),
            PathBuf::from("/srv/notes").join("ideas")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_path_for_absolute_ignores_base_dir() {
        let store = FileStore::with_base_dir("/srv/notes");
        assert_eq!(store.path_for("/tmp/x"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_base_dir(dir.path());
        assert!(store.load("nothing_here").unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_encoded_lines() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_base_dir(dir.path());
        let notes = vec![Note::new("Hello"), Note::new("abc 123")];

        store.save("c", &notes).unwrap();

        let raw = fs::read_to_string(dir.path().join("c")).unwrap();
        assert_eq!(raw, "Uryyb\nnop 123\n");
    }

    #[test]
    fn test_save_empty_list_truncates() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_base_dir(dir.path());
        store.save("c", &[Note::new("a")]).unwrap();
        store.save("c", &[]).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("c")).unwrap(), "");
        assert!(store.load("c").unwrap().is_empty());
    }

    #[test]
    fn test_load_accepts_crlf_and_missing_final_newline() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c"), "Uryyb\r\nJbeyq").unwrap();
        let store = FileStore::with_base_dir(dir.path());

        let notes = store.load("c").unwrap();
        let texts: Vec<&str> = notes.iter().map(|n| n.text()).collect();
        assert_eq!(texts, vec!["Hello", "World"]);
    }

    #[test]
    fn test_save_creates_missing_base_dir() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_base_dir(dir.path().join("nested").join("deeper"));
        store.save("c", &[Note::new("x")]).unwrap();
        assert_eq!(store.load("c").unwrap(), vec![Note::new("x")]);
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();
        let store = FileStore::with_base_dir(dir.path());
        assert!(matches!(store.load("c"), Err(NotesError::Storage(_))));
    }

    #[test]
    fn test_load_invalid_utf8_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c"), [0xff, 0xfe, b'\n']).unwrap();
        let store = FileStore::with_base_dir(dir.path());
        assert!(matches!(store.load("c"), Err(NotesError::Storage(_))));
    }
}
