use serde::{Deserialize, Serialize};

/// Format family of an uploaded file, decided from its name extension.
///
/// Every name maps to a variant; extraction is an exhaustive match over
/// this enum, so there is no "no extractor found" case downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// ZIP package with numbered slide parts (`.pptx`)
    SlideDeck,
    /// Workbook decoded sheet-by-sheet (`.xlsx`, `.xls`, `.csv`)
    Spreadsheet,
    /// Page-oriented document (`.pdf`)
    Paginated,
    /// ZIP package with section XML parts (`.hwpx`)
    WordContainer,
    /// Raw text passthrough (`.txt`)
    PlainText,
    /// Known legacy binary format we cannot read (`.hwp`)
    LegacyBinary,
    /// Anything else, including names without an extension
    Unsupported,
}

impl FileKind {
    /// Classify a file by the substring after the last `.` in its name,
    /// case-insensitively. A name with no `.` is unsupported.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Unsupported;
        };

        match ext.to_lowercase().as_str() {
            "pptx" => Self::SlideDeck,
            "xlsx" | "xls" | "csv" => Self::Spreadsheet,
            "pdf" => Self::Paginated,
            "hwpx" => Self::WordContainer,
            "txt" => Self::PlainText,
            "hwp" => Self::LegacyBinary,
            _ => Self::Unsupported,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlideDeck => write!(f, "slide_deck"),
            Self::Spreadsheet => write!(f, "spreadsheet"),
            Self::Paginated => write!(f, "paginated"),
            Self::WordContainer => write!(f, "word_container"),
            Self::PlainText => write!(f, "plain_text"),
            Self::LegacyBinary => write!(f, "legacy_binary"),
            Self::Unsupported => write!(f, "unsupported"),
        }
    }
}
