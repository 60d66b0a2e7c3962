//! bitcore: document state and autosave logic for BitNotes

pub mod browser;
pub mod config;
pub mod document;
pub mod file_type;
pub mod gutter;
pub mod input;
pub mod naming;
pub mod session;
pub mod settings;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use config::Config;
pub use document::DocumentState;
pub use file_type::FileType;
pub use session::Session;
pub use theme::BitTheme;
