use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FileKind, Question, UploadedFile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub index: usize,
    pub name: String,
    pub kind: FileKind,
    pub chars: usize,
    pub placeholder: bool,
}

impl FileSummary {
    pub fn from_files(files: &[UploadedFile]) -> Vec<Self> {
        files
            .iter()
            .enumerate()
            .map(|(index, file)| Self {
                index,
                name: file.name.clone(),
                kind: file.kind,
                chars: file.content.chars().count(),
                placeholder: file.placeholder,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub files: Vec<FileSummary>,
    pub corpus_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusResponse {
    pub corpus: String,
    pub files: Vec<FileSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    /// Desired number of questions. Omitted means the configured default.
    #[validate(range(min = 1, max = 100))]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub llm_available: bool,
}
