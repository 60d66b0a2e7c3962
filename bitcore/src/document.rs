//! Document state for one editor window.
//!
//! Holds the buffer text plus everything needed to name the autosave file
//! and lay out the text. One instance lives per window and is dropped with it.

use crate::file_type::FileType;
use crate::naming;
use std::num::NonZeroU32;

/// Tab stop width used until the user applies another.
pub const DEFAULT_TAB_WIDTH: NonZeroU32 = match NonZeroU32::new(4) {
    Some(n) => n,
    None => panic!("tab width must be positive"),
};

/// Font size in points used until the user applies another.
pub const DEFAULT_FONT_SIZE: NonZeroU32 = match NonZeroU32::new(16) {
    Some(n) => n,
    None => panic!("font size must be positive"),
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentState {
    text: String,
    base_name: String,
    file_type: FileType,
    tab_width: NonZeroU32,
    font_size: NonZeroU32,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new(naming::generate())
    }
}

impl DocumentState {
    /// Empty document saved as `<base_name>.txt` with default sizes.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            base_name: base_name.into(),
            file_type: FileType::default(),
            tab_width: DEFAULT_TAB_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Start with sizes other than the built-in defaults.
    pub fn with_sizes(mut self, tab_width: NonZeroU32, font_size: NonZeroU32) -> Self {
        self.tab_width = tab_width;
        self.font_size = font_size;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the editing widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Append imported text to the end of the buffer.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn set_base_name(&mut self, base_name: impl Into<String>) {
        self.base_name = base_name.into();
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn set_file_type(&mut self, file_type: FileType) {
        self.file_type = file_type;
    }

    pub fn extension(&self) -> &'static str {
        self.file_type.extension()
    }

    /// Base name plus extension, e.g. `0x1f2e3d4c5b6a7988.txt`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension())
    }

    pub fn tab_width(&self) -> u32 {
        self.tab_width.get()
    }

    pub fn set_tab_width(&mut self, tab_width: NonZeroU32) {
        self.tab_width = tab_width;
    }

    pub fn font_size(&self) -> u32 {
        self.font_size.get()
    }

    pub fn set_font_size(&mut self, font_size: NonZeroU32) {
        self.font_size = font_size;
    }

    pub fn line_count(&self) -> usize {
        crate::gutter::line_count(&self.text)
    }
}
