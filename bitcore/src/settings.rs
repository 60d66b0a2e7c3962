//! Parsing of the settings bar fields.
//!
//! Each parser returns the accepted value or a [`SettingsError`] whose
//! `Display` text is shown to the user as-is. Callers keep the previous
//! value and clear the field when a parse fails.

use crate::document::DocumentState;
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

/// Largest tab stop accepted from the tab size field.
pub const MAX_TAB_WIDTH: u32 = 64;

/// Largest font size accepted from the font size field.
pub const MAX_FONT_SIZE: u32 = 256;

/// The numeric fields of the settings bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    TabWidth,
    FontSize,
}

impl SizeField {
    pub fn max(self) -> u32 {
        match self {
            SizeField::TabWidth => MAX_TAB_WIDTH,
            SizeField::FontSize => MAX_FONT_SIZE,
        }
    }
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeField::TabWidth => f.write_str("tab size"),
            SizeField::FontSize => f.write_str("font size"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Please enter a number as your input for the {field}")]
    NotANumber { field: SizeField, input: String },
    #[error("Please enter a {field} of at least 1")]
    NotPositive { field: SizeField, value: i64 },
    #[error("Please enter a {field} no larger than {max}")]
    TooLarge { field: SizeField, max: u32 },
    #[error("Please enter a file name")]
    EmptyName,
    #[error("File names cannot contain '/' or '\\': {0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Check an already-numeric size against the field's range.
pub fn check_size(field: SizeField, value: i64) -> Result<NonZeroU32> {
    if value < 1 {
        return Err(SettingsError::NotPositive { field, value });
    }
    let max = field.max();
    if value > i64::from(max) {
        return Err(SettingsError::TooLarge { field, max });
    }
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(SettingsError::NotPositive { field, value })
}

/// Parse a size field. Surrounding whitespace is ignored.
pub fn parse_size(field: SizeField, input: &str) -> Result<NonZeroU32> {
    let value: i64 = input.trim().parse().map_err(|_| SettingsError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    check_size(field, value)
}

/// Apply the tab size field. Returns the text the field should show.
pub fn apply_tab_width(input: &str, doc: &mut DocumentState) -> Result<String> {
    let width = parse_size(SizeField::TabWidth, input)?;
    doc.set_tab_width(width);
    Ok(width.to_string())
}

/// Apply the font size field. Returns the text the field should show.
///
/// The editor area and the gutter both read the size from the document, so
/// updating it here resizes both.
pub fn apply_font_size(input: &str, doc: &mut DocumentState) -> Result<String> {
    let size = parse_size(SizeField::FontSize, input)?;
    doc.set_font_size(size);
    Ok(size.to_string())
}

/// Derive a base name from the file name field.
///
/// Everything from the first `.` on is dropped, so `notes.py` and
/// `notes.tar.gz` both give `notes`.
pub fn parse_base_name(field: &str) -> Result<String> {
    let stem = match field.find('.') {
        Some(dot) => &field[..dot],
        None => field,
    };
    let stem = stem.trim();
    if stem.is_empty() {
        return Err(SettingsError::EmptyName);
    }
    if stem.contains(|c: char| c == '/' || c == '\\') {
        return Err(SettingsError::InvalidName(stem.to_string()));
    }
    Ok(stem.to_string())
}
