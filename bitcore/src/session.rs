//! One editor window's worth of state and the handlers that keep it in sync.
//!
//! The window shell owns a [`Session`] and calls one handler per event:
//! [`Session::on_text_changed`] after any edit, [`Session::on_update`] for the
//! update button or shortcut, and [`Session::on_open`] with a chosen path.
//! A "new" action is a fresh `Session` in a fresh window.
//!
//! Every mutation ends with an autosave. Failures never touch the buffer;
//! they are logged and queued as notices for the shell to show.

use crate::config::Config;
use crate::document::DocumentState;
use crate::file_type;
use crate::gutter;
use crate::settings::{self, SettingsError};
use crate::storage::{self, StorageError};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Editable contents of the settings bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFields {
    pub name: String,
    pub tab_width: String,
    pub font_size: String,
    pub file_type_label: String,
}

impl SettingsFields {
    fn from_document(doc: &DocumentState) -> Self {
        Self {
            name: doc.file_name(),
            tab_width: doc.tab_width().to_string(),
            font_size: doc.font_size().to_string(),
            file_type_label: doc.file_type().label().to_string(),
        }
    }
}

/// Outcome of the most recent autosave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saved(PathBuf),
    Failed(String),
}

pub struct Session {
    config: Config,
    doc: DocumentState,
    pub fields: SettingsFields,
    gutter: String,
    notices: VecDeque<String>,
    save_status: SaveStatus,
}

impl Session {
    /// Fresh window: generated name, configured sizes, empty buffer.
    pub fn new(config: Config) -> Self {
        let doc = DocumentState::default().with_sizes(config.tab_width, config.font_size);
        Self::with_document(config, doc)
    }

    pub fn with_document(config: Config, doc: DocumentState) -> Self {
        let fields = SettingsFields::from_document(&doc);
        let gutter = gutter::render(doc.text());
        Self {
            config,
            doc,
            fields,
            gutter,
            notices: VecDeque::new(),
            save_status: SaveStatus::Idle,
        }
    }

    pub fn document(&self) -> &DocumentState {
        &self.doc
    }

    /// Buffer for the text area. Call [`Session::on_text_changed`] after
    /// writing through it.
    pub fn text_mut(&mut self) -> &mut String {
        self.doc.text_mut()
    }

    /// Line numbers for the current text.
    pub fn gutter(&self) -> &str {
        &self.gutter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Next message to show the user, oldest first.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notices.pop_front()
    }

    pub fn peek_notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    /// The buffer changed: refresh the line numbers and autosave.
    pub fn on_text_changed(&mut self) {
        self.gutter = gutter::render(self.doc.text());
        self.autosave();
    }

    /// Apply the settings bar: name, file type, tab size, font size, then
    /// save. Rejected fields keep their previous value in the document.
    /// Returns the rejections, which are also queued as notices.
    pub fn on_update(&mut self) -> Vec<SettingsError> {
        let mut rejected = Vec::new();

        match settings::parse_base_name(&self.fields.name) {
            Ok(base_name) => self.doc.set_base_name(base_name),
            Err(e) => rejected.push(e),
        }

        let file_type = file_type::resolve(&self.fields.file_type_label, self.doc.file_type());
        self.doc.set_file_type(file_type);
        self.fields.name = self.doc.file_name();

        match settings::apply_tab_width(&self.fields.tab_width, &mut self.doc) {
            Ok(text) => self.fields.tab_width = text,
            Err(e) => {
                self.fields.tab_width.clear();
                rejected.push(e);
            }
        }

        match settings::apply_font_size(&self.fields.font_size, &mut self.doc) {
            Ok(text) => self.fields.font_size = text,
            Err(e) => {
                self.fields.font_size.clear();
                rejected.push(e);
            }
        }

        for e in &rejected {
            log::info!("settings rejected: {}", e);
            self.notices.push_back(e.to_string());
        }

        self.autosave();
        rejected
    }

    /// Append the file at `path` to the buffer.
    ///
    /// The name field shows the opened file's name, but saving keeps using
    /// the current base name until the next update.
    pub fn on_open(&mut self, path: &Path) -> Result<(), StorageError> {
        let imported = match storage::read_lines(path) {
            Ok(imported) => imported,
            Err(e) => {
                log::error!("{}", e);
                self.notices.push_back(e.to_string());
                return Err(e);
            }
        };
        log::info!("imported {} bytes from {}", imported.len(), path.display());
        self.doc.append(&imported);
        if let Some(name) = path.file_name() {
            self.fields.name = name.to_string_lossy().into_owned();
        }
        self.on_text_changed();
        Ok(())
    }

    /// Write the buffer to its autosave path now.
    pub fn save(&mut self) -> Result<PathBuf, StorageError> {
        let result = storage::save(&self.config.home, &self.doc);
        match &result {
            Ok(path) => {
                log::debug!("autosaved {} bytes to {}", self.doc.text().len(), path.display());
                self.save_status = SaveStatus::Saved(path.clone());
            }
            Err(e) => {
                log::error!("{}", e);
                self.save_status = SaveStatus::Failed(e.to_string());
            }
        }
        result
    }

    fn autosave(&mut self) {
        // failures are recorded in save_status; the next edit retries
        let _ = self.save();
    }
}
