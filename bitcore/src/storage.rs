//! Autosave and import.
//!
//! Every save rewrites `<home>/Desktop/<base name><extension>` in full.
//! Imports read a chosen file line by line and hand the text back to be
//! appended to the buffer.

use crate::document::DocumentState;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Folder under the home directory that receives autosaves.
pub const DESKTOP_FOLDER: &str = "Desktop";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("could not save {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub fn desktop_dir(home: &Path) -> PathBuf {
    home.join(DESKTOP_FOLDER)
}

/// Where `doc` is autosaved. Recomputed on every save, so a rename starts a
/// new file and leaves the old one where it was.
pub fn save_path(home: &Path, doc: &DocumentState) -> PathBuf {
    desktop_dir(home).join(doc.file_name())
}

/// Overwrite the autosave file with the full buffer. Returns the path written.
pub fn save(home: &Path, doc: &DocumentState) -> Result<PathBuf> {
    let path = save_path(home, doc);
    match write_all(&path, doc.text()) {
        Ok(()) => Ok(path),
        Err(source) => Err(StorageError::Write { path, source }),
    }
}

fn write_all(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Read `path` line by line, each line followed by `\n`.
///
/// Nothing is returned unless the whole file reads cleanly, so a failed
/// import never leaves a partial append behind.
pub fn read_lines(path: &Path) -> Result<String> {
    let read_err = |source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let mut imported = String::new();
    for line in BufReader::new(file).lines() {
        imported.push_str(&line.map_err(read_err)?);
        imported.push('\n');
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_type::FileType;

    #[test]
    fn test_save_path() {
        let mut doc = DocumentState::new("0xabc123");
        assert_eq!(
            save_path(Path::new("/home/h"), &doc),
            PathBuf::from("/home/h/Desktop/0xabc123.txt")
        );
        doc.set_file_type(FileType::Html);
        assert_eq!(
            save_path(Path::new("/home/h"), &doc),
            PathBuf::from("/home/h/Desktop/0xabc123.html")
        );
    }

    #[test]
    fn test_save_writes_full_text() {
        let home = tempfile::tempdir().unwrap();
        let mut doc = DocumentState::new("0xabc123");
        doc.text_mut().push_str("first draft that is fairly long\n");

        let path = save(home.path(), &doc).unwrap();
        assert_eq!(path, home.path().join("Desktop").join("0xabc123.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.text());

        // overwrite, never append: shorter content must not leave a tail
        doc.text_mut().clear();
        doc.text_mut().push_str("short");
        save(home.path(), &doc).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_save_is_idempotent() {
        let home = tempfile::tempdir().unwrap();
        let mut doc = DocumentState::new("same");
        doc.text_mut().push_str("line one\nline two");

        let path = save(home.path(), &doc).unwrap();
        let first = std::fs::read(&path).unwrap();
        save(home.path(), &doc).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_rename_leaves_old_file() {
        let home = tempfile::tempdir().unwrap();
        let mut doc = DocumentState::new("before");
        doc.text_mut().push_str("x");
        let old = save(home.path(), &doc).unwrap();

        doc.set_base_name("after");
        let new = save(home.path(), &doc).unwrap();
        assert_ne!(old, new);
        assert!(old.exists());
        assert!(new.exists());
    }

    #[test]
    fn test_save_failure_reports_path() {
        let home = tempfile::tempdir().unwrap();
        // a plain file where the Desktop folder should be
        std::fs::write(home.path().join("Desktop"), "not a folder").unwrap();
        let doc = DocumentState::new("blocked");

        match save(home.path(), &doc) {
            Err(StorageError::Write { path, .. }) => {
                assert_eq!(path, home.path().join("Desktop").join("blocked.txt"));
            }
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_lines_terminates_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "world").unwrap();
        assert_eq!(read_lines(&path).unwrap(), "world\n");

        std::fs::write(&path, "a\r\nb\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), "a\nb\n");

        std::fs::write(&path, "").unwrap();
        assert_eq!(read_lines(&path).unwrap(), "");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            read_lines(&missing),
            Err(StorageError::Read { path, .. }) if path == missing
        ));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, b'\n']).unwrap();
        assert!(read_lines(&path).is_err());
    }
}
