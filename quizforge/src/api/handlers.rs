//! HTTP handlers for the upload → corpus → questions flow.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::{
    BatchResponse, CorpusResponse, FileSummary, GenerateQuestionsRequest,
    GenerateQuestionsResponse, HealthResponse,
};
use crate::api::AppState;
use crate::error::{QuizforgeError, Result};
use crate::models::RawUpload;

/// `GET /api/v1/health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        llm_available: state.generator.is_available(),
    })
}

/// `POST /api/v1/files:upload`
///
/// Accepts a multipart form with one or more `file` fields. The whole
/// batch is size-checked before any extraction; on success every file
/// gets a slot in the session (placeholder content when its extraction
/// failed) and the corpus is rebuilt.
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>> {
    let max_file_size = state.config.upload.max_file_size;
    let mut batch: Vec<RawUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| QuizforgeError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let name = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| QuizforgeError::Validation("File field has no name".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| QuizforgeError::Validation(format!("Failed to read file: {e}")))?;

        if bytes.len() > max_file_size {
            return Err(QuizforgeError::Validation(format!(
                "File {} too large: {} bytes (max {} bytes)",
                name,
                bytes.len(),
                max_file_size
            )));
        }

        batch.push(RawUpload::new(name, bytes.to_vec()));
    }

    if batch.is_empty() {
        return Err(QuizforgeError::Validation(
            "No files in upload".to_string(),
        ));
    }

    let mut session = state.session.lock().await;
    let files = session.ingest(batch)?;
    let summaries = FileSummary::from_files(files);

    let warning = if session.corpus_is_blank() {
        tracing::warn!("uploaded batch produced an empty corpus");
        Some("No extractable text was found in the uploaded files.".to_string())
    } else {
        None
    };

    Ok(Json(BatchResponse {
        files: summaries,
        corpus_chars: session.corpus().chars().count(),
        warning,
    }))
}

/// `GET /api/v1/corpus`
pub async fn get_corpus(State(state): State<AppState>) -> Json<CorpusResponse> {
    let session = state.session.lock().await;
    Json(CorpusResponse {
        corpus: session.corpus(),
        files: FileSummary::from_files(session.files()),
    })
}

/// `DELETE /api/v1/files/{index}`
pub async fn remove_file(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<BatchResponse>> {
    let mut session = state.session.lock().await;
    session.remove(index)?;

    Ok(Json(BatchResponse {
        files: FileSummary::from_files(session.files()),
        corpus_chars: session.corpus().chars().count(),
        warning: None,
    }))
}

/// `DELETE /api/v1/files`
pub async fn clear_files(State(state): State<AppState>) -> Json<BatchResponse> {
    let mut session = state.session.lock().await;
    session.clear();

    Json(BatchResponse {
        files: Vec::new(),
        corpus_chars: 0,
        warning: None,
    })
}

/// `POST /api/v1/questions:generate`
///
/// Hands the aggregated corpus and the desired count to the generation
/// model and returns the parsed question records.
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(req): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>> {
    req.validate()
        .map_err(|e| QuizforgeError::Validation(e.to_string()))?;

    let count = req
        .count
        .unwrap_or(state.config.questions.default_count)
        .min(state.config.questions.max_count);

    // Snapshot the corpus, then release the session lock before the
    // (slow) generation call.
    let corpus = {
        let session = state.session.lock().await;
        session.corpus()
    };

    if corpus.trim().is_empty() {
        return Err(QuizforgeError::Validation(
            "Nothing to generate from: the corpus is empty".to_string(),
        ));
    }

    let questions = state.generator.generate(&corpus, count).await?;
    tracing::info!(count = questions.len(), "generated questions");

    Ok(Json(GenerateQuestionsResponse { questions }))
}
