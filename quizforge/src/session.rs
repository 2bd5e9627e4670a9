//! Upload session: the ordered file set and its aggregated corpus.
//!
//! The session is the only holder of upload state. Callers mutate it
//! through `ingest` / `remove` / `clear` and read the corpus back through
//! [`UploadSession::corpus`], which recomputes the aggregation from the
//! cached per-file text on every call.

use crate::config::UploadConfig;
use crate::error::{QuizforgeError, Result};
use crate::extraction::extract_file;
use crate::models::{FileKind, RawUpload, UploadedFile};

/// Marker appended when the corpus is cut at the character cap. Budgeted
/// inside the cap so the final length never exceeds it.
pub const TRUNCATION_MARKER: &str = "...(truncated)";

pub struct UploadSession {
    files: Vec<UploadedFile>,
    max_files: usize,
    corpus_char_limit: usize,
}

impl UploadSession {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            files: Vec::new(),
            max_files: config.max_files,
            corpus_char_limit: config.corpus_char_limit,
        }
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add a batch of raw files. The size check runs before any extraction:
    /// a batch that would push the session past `max_files` is rejected
    /// whole and the session is left untouched.
    ///
    /// On success every input occupies exactly one slot, in input order. A
    /// file whose extraction fails still gets its slot, holding a
    /// placeholder diagnostic instead of text.
    pub fn ingest(&mut self, batch: Vec<RawUpload>) -> Result<&[UploadedFile]> {
        let count = self.files.len() + batch.len();
        if count > self.max_files {
            return Err(QuizforgeError::BatchTooLarge {
                count,
                max: self.max_files,
            });
        }

        for upload in batch {
            let kind = FileKind::from_name(&upload.name);
            let outcome = extract_file(kind, &upload.name, &upload.bytes);
            let placeholder = outcome.is_placeholder();

            self.files.push(UploadedFile {
                name: upload.name,
                kind,
                content: outcome.into_text(),
                placeholder,
            });
        }

        Ok(&self.files)
    }

    /// Drop the file at `index`, keeping the relative order of the rest.
    /// Extraction results are cached for the lifetime of each file, so
    /// removal never re-runs an extractor.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.files.len() {
            return Err(QuizforgeError::NotFound(format!(
                "no file at index {index}"
            )));
        }
        self.files.remove(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// The aggregated corpus for the current file set.
    pub fn corpus(&self) -> String {
        aggregate(&self.files, self.corpus_char_limit)
    }

    /// True when no file contributed any non-whitespace text. The caller
    /// surfaces this as a warning; it is not an error.
    pub fn corpus_is_blank(&self) -> bool {
        self.files
            .iter()
            .all(|file| file.content.trim().is_empty())
    }
}

/// Concatenate all files into one labeled blob: a delimiter line naming
/// the file, its content, then a blank line. The cap is applied once,
/// after the full concatenation, never mid-file bookkeeping — the tail is
/// cut and the marker appended in its place.
pub fn aggregate(files: &[UploadedFile], char_limit: usize) -> String {
    let mut combined = String::new();
    for file in files {
        combined.push_str(&format!("\n--- [File: {}] ---\n{}\n", file.name, file.content));
    }

    if combined.chars().count() > char_limit {
        let keep = char_limit.saturating_sub(TRUNCATION_MARKER.chars().count());
        combined = combined.chars().take(keep).collect();
        combined.push_str(TRUNCATION_MARKER);
    }

    combined
}
