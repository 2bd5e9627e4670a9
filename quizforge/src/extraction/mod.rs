//! Per-format text extraction.
//!
//! Each extractor turns one uploaded file into plain text and reports
//! failures as a typed [`ExtractError`]. [`extract_file`] is the single
//! entry point: it dispatches on [`FileKind`] and converts every failure
//! into a human-readable placeholder, so nothing extraction-related ever
//! propagates past the per-file boundary.

use thiserror::Error;

use crate::models::FileKind;

mod archive;
mod hwpx;
mod pdf;
mod pptx;
mod spreadsheet;
mod xml;

pub use archive::Package;
pub use hwpx::HwpxExtractor;
pub use pdf::PdfExtractor;
pub use pptx::PptxExtractor;
pub use spreadsheet::SpreadsheetExtractor;
pub use xml::collect_tag_text;

/// What can go wrong while extracting a single file. Kinds stay
/// inspectable so callers (and tests) can tell a password-protected
/// package from a corrupt one.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("package is password protected")]
    Protected,

    #[error("package is corrupt or not a readable archive: {0}")]
    Corrupt(String),

    #[error("expected part is missing from the package")]
    PartMissing,

    #[error("malformed XML in package part: {0}")]
    MalformedXml(String),

    #[error("could not decode document: {0}")]
    Decode(String),
}

/// Result of extracting one file: either its text (possibly empty — a file
/// with no extractable text is not an error) or a placeholder diagnostic
/// that takes the file's place in the corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Text(String),
    Placeholder(String),
}

impl ExtractionOutcome {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) | Self::Placeholder(text) => text,
        }
    }
}

/// Extract `bytes` according to `kind`. Never fails: every error becomes a
/// placeholder naming the file and hinting at the cause.
pub fn extract_file(kind: FileKind, name: &str, bytes: &[u8]) -> ExtractionOutcome {
    match kind {
        FileKind::SlideDeck => match PptxExtractor::extract(bytes) {
            Ok(text) => ExtractionOutcome::Text(text),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "slide deck extraction failed");
                ExtractionOutcome::Placeholder(slide_deck_placeholder(name, &e))
            }
        },
        FileKind::Spreadsheet => {
            let is_csv = name.to_lowercase().ends_with(".csv");
            match SpreadsheetExtractor::extract(bytes, is_csv) {
                Ok(text) => ExtractionOutcome::Text(text),
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "spreadsheet extraction failed");
                    ExtractionOutcome::Placeholder(format!(
                        "[Spreadsheet error] {name}: the workbook could not be read."
                    ))
                }
            }
        }
        FileKind::Paginated => match PdfExtractor::extract(bytes) {
            Ok(text) => ExtractionOutcome::Text(text),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "PDF extraction failed");
                ExtractionOutcome::Placeholder(format!(
                    "[PDF error] {name}: no text could be extracted. \
                     (The file may be a scanned image without a text layer.)"
                ))
            }
        },
        FileKind::WordContainer => match HwpxExtractor::extract(bytes) {
            Ok(text) => ExtractionOutcome::Text(text),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "document extraction failed");
                ExtractionOutcome::Placeholder(word_container_placeholder(name, &e))
            }
        },
        FileKind::PlainText => {
            ExtractionOutcome::Text(String::from_utf8_lossy(bytes).into_owned())
        }
        FileKind::LegacyBinary => ExtractionOutcome::Placeholder(format!(
            "[Notice: {name}] This legacy binary format cannot be read directly. \
             Save the document as PDF and upload that instead."
        )),
        FileKind::Unsupported => ExtractionOutcome::Placeholder(format!(
            "[Notice: {name}] Unsupported format. Paste the content manually."
        )),
    }
}

fn slide_deck_placeholder(name: &str, error: &ExtractError) -> String {
    match error {
        ExtractError::Protected => {
            format!("[Slide deck error] {name}: the file is password protected.")
        }
        _ => format!("[Slide deck error] {name}: the file appears to be corrupt."),
    }
}

fn word_container_placeholder(name: &str, error: &ExtractError) -> String {
    match error {
        ExtractError::Protected => {
            format!("[Document error] {name}: the file is password protected.")
        }
        _ => format!("[Document error] {name}: the document package could not be read."),
    }
}
