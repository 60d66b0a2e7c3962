//! Supported file types and their extensions.

use std::fmt;

/// A file type the editor can save as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileType {
    #[default]
    Text,
    Java,
    C,
    Header,
    Cpp,
    CSharp,
    Python,
    Php,
    JavaScript,
    Json,
    Ruby,
    Perl,
    VisualBasic,
    Assembly,
    ObjectiveC,
    Swift,
    R,
    Sql,
    Go,
    Lolcode,
    Html,
    Xml,
}

impl FileType {
    /// Every type, in the order the file type picker lists them.
    pub const ALL: [FileType; 22] = [
        FileType::Text,
        FileType::Java,
        FileType::C,
        FileType::Header,
        FileType::Cpp,
        FileType::CSharp,
        FileType::Python,
        FileType::Php,
        FileType::JavaScript,
        FileType::Json,
        FileType::Ruby,
        FileType::Perl,
        FileType::VisualBasic,
        FileType::Assembly,
        FileType::ObjectiveC,
        FileType::Swift,
        FileType::R,
        FileType::Sql,
        FileType::Go,
        FileType::Lolcode,
        FileType::Html,
        FileType::Xml,
    ];

    /// Human-readable label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            FileType::Text => "Text File (*.txt)",
            FileType::Java => "Java File (*.java)",
            FileType::C => "C File (*.c)",
            FileType::Header => "Header File (*.h)",
            FileType::Cpp => "C++ File (*.cpp)",
            FileType::CSharp => "C# File (*.cs)",
            FileType::Python => "Python File (*.py)",
            FileType::Php => "PHP File (*.php)",
            FileType::JavaScript => "JavaScript File (*.js)",
            FileType::Json => "JavaScript Object Notation File (*.json)",
            FileType::Ruby => "Ruby File (*.rb)",
            FileType::Perl => "Perl File (*.pl)",
            FileType::VisualBasic => "Visual Basic File (*.vb)",
            FileType::Assembly => "Assembly File (*.asm)",
            FileType::ObjectiveC => "Objective C File (*.m)",
            FileType::Swift => "Swift File (*.swift)",
            FileType::R => "R File (*.r)",
            FileType::Sql => "SQL File (*.sql)",
            FileType::Go => "Go File (*.go)",
            FileType::Lolcode => "LOLCODE File (*.lol)",
            FileType::Html => "HyperText Markup Language File (*.html)",
            FileType::Xml => "eXtensible Markup Language File (*.xml)",
        }
    }

    /// Canonical extension, leading dot included.
    pub fn extension(self) -> &'static str {
        match self {
            FileType::Text => ".txt",
            FileType::Java => ".java",
            FileType::C => ".c",
            FileType::Header => ".h",
            FileType::Cpp => ".cpp",
            FileType::CSharp => ".cs",
            FileType::Python => ".py",
            FileType::Php => ".php",
            FileType::JavaScript => ".js",
            FileType::Json => ".json",
            FileType::Ruby => ".rb",
            FileType::Perl => ".pl",
            FileType::VisualBasic => ".vb",
            FileType::Assembly => ".asm",
            FileType::ObjectiveC => ".m",
            FileType::Swift => ".swift",
            FileType::R => ".r",
            FileType::Sql => ".sql",
            FileType::Go => ".go",
            FileType::Lolcode => ".lol",
            FileType::Html => ".html",
            FileType::Xml => ".xml",
        }
    }

    pub fn from_label(label: &str) -> Option<FileType> {
        FileType::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a picker label to a file type.
///
/// Labels outside the table leave `current` in effect.
pub fn resolve(label: &str, current: FileType) -> FileType {
    match FileType::from_label(label) {
        Some(file_type) => file_type,
        None => {
            log::debug!("ignoring unknown file type label {:?}", label);
            current
        }
    }
}
