use std::sync::Arc;

use crate::config::{parse_llm_provider_model, LlmConfig};
use crate::error::{QuizforgeError, Result};
use crate::generation::api::LlmApiClient;
use crate::generation::prompts::build_question_prompt;
use crate::models::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAI,
    OpenRouter,
    Ollama,
    LmStudio,
    OpenAICompatible { base_url: String },
    Unavailable { reason: String },
}

/// Question-generation collaborator. Consumes the aggregated corpus plus a
/// desired count and returns question records; the transport is an
/// OpenAI-compatible chat-completion call.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    backend: LlmBackend,
    config: Option<Arc<LlmConfig>>,
}

impl QuestionGenerator {
    pub fn new(config: Option<&LlmConfig>) -> Self {
        let Some(config) = config else {
            return Self::unavailable("No LLM configuration provided");
        };

        let (provider, _model) = parse_llm_provider_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "openai" => LlmBackend::OpenAI,
            "openrouter" => LlmBackend::OpenRouter,
            "ollama" => LlmBackend::Ollama,
            "lmstudio" => LlmBackend::LmStudio,
            _ => {
                if let Some(base_url) = &config.base_url {
                    LlmBackend::OpenAICompatible {
                        base_url: base_url.clone(),
                    }
                } else {
                    LlmBackend::Unavailable {
                        reason: format!("Unknown provider in model: {}", config.model),
                    }
                }
            }
        };

        Self {
            backend,
            config: Some(Arc::new(config.clone())),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: LlmBackend::Unavailable {
                reason: reason.to_string(),
            },
            config: None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, LlmBackend::Unavailable { .. })
    }

    pub fn backend(&self) -> &LlmBackend {
        &self.backend
    }

    /// Generate `count` questions over `corpus`.
    pub async fn generate(&self, corpus: &str, count: u32) -> Result<Vec<Question>> {
        if !self.is_available() {
            return Err(QuizforgeError::LlmUnavailable(self.unavailable_reason()));
        }

        let config = self
            .config
            .as_deref()
            .ok_or_else(|| QuizforgeError::LlmUnavailable("No config available".to_string()))?;

        let client = LlmApiClient::new(config)?;
        let prompt = build_question_prompt(corpus, count);
        let value = client.complete_json(&prompt).await?;

        let questions: Vec<Question> = serde_json::from_value(value)
            .map_err(|e| QuizforgeError::Llm(format!("Failed to deserialize questions: {e}")))?;

        if questions.is_empty() {
            return Err(QuizforgeError::Llm(
                "Model returned no questions".to_string(),
            ));
        }

        Ok(questions)
    }

    fn unavailable_reason(&self) -> String {
        match &self.backend {
            LlmBackend::Unavailable { reason } => reason.clone(),
            _ => "Question generation is not configured".to_string(),
        }
    }
}
