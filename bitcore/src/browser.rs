//! Directory listing behind the "open file" window.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
}

#[derive(Debug, Clone)]
pub struct FileBrowser {
    pub current_dir: PathBuf,
    pub entries: Vec<FileEntry>,
    pub selected_index: Option<usize>,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        let mut browser = Self {
            current_dir: start_dir,
            entries: Vec::new(),
            selected_index: None,
        };
        browser.refresh();
        browser
    }

    /// Re-read the current directory: `..` first, then folders, then files,
    /// each sorted case-insensitively. Dotfiles are hidden.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected_index = None;

        if let Some(parent) = self.current_dir.parent() {
            self.entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_directory: true,
            });
        }

        let read_dir = match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                log::warn!("cannot list {}: {}", self.current_dir.display(), e);
                return;
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in read_dir.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            let is_directory = path.is_dir();
            let entry = FileEntry { name, path, is_directory };
            if is_directory {
                dirs.push(entry);
            } else {
                files.push(entry);
            }
        }
        dirs.sort_by_key(|e| e.name.to_lowercase());
        files.sort_by_key(|e| e.name.to_lowercase());
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn navigate_to(&mut self, path: PathBuf) {
        if path.is_dir() {
            self.current_dir = path;
            self.refresh();
        }
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_index.and_then(|i| self.entries.get(i))
    }

    /// The selected entry if it is a file that can be opened.
    pub fn selected_file(&self) -> Option<PathBuf> {
        self.selected_entry()
            .filter(|e| !e.is_directory)
            .map(|e| e.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(browser: &FileBrowser) -> Vec<&str> {
        browser.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("A.md"), "").unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("Alpha")).unwrap();

        let browser = FileBrowser::new(dir.path().to_path_buf());
        assert_eq!(names(&browser), vec!["..", "Alpha", "zeta", "A.md", "b.txt"]);
        assert!(browser.selected_entry().is_none());
    }

    #[test]
    fn test_navigate_and_select() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("note.txt"), "hi").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf());
        browser.navigate_to(sub.clone());
        assert_eq!(browser.current_dir, sub);
        assert_eq!(names(&browser), vec!["..", "note.txt"]);

        browser.selected_index = Some(0);
        assert_eq!(browser.selected_file(), None);
        browser.selected_index = Some(1);
        assert_eq!(browser.selected_file(), Some(sub.join("note.txt")));
    }

    #[test]
    fn test_navigate_to_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, "").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf());
        browser.navigate_to(file);
        assert_eq!(browser.current_dir, dir.path());
    }
}
