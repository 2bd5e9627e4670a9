use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub questions: QuestionConfig,
    pub llm: Option<LlmConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Limits applied to uploaded batches and the aggregated corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum number of files in one session. Exceeding it rejects the
    /// whole batch before any extraction runs.
    pub max_files: usize,
    /// Maximum size in bytes accepted for a single uploaded file.
    pub max_file_size: usize,
    /// Character cap on the aggregated corpus. The observed deployments
    /// drifted between 50000 and 60000, so it stays configurable.
    pub corpus_char_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionConfig {
    pub default_count: u32,
    pub max_count: u32,
}

/// LLM configuration for the question-generation call
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("QUIZFORGE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("QUIZFORGE_PORT", 3000),
            },
            upload: UploadConfig {
                max_files: parse_env_or("UPLOAD_MAX_FILES", 10),
                max_file_size: parse_env_or("UPLOAD_MAX_FILE_SIZE", 25 * 1024 * 1024),
                corpus_char_limit: parse_env_or("CORPUS_CHAR_LIMIT", 60_000),
            },
            questions: QuestionConfig {
                default_count: parse_env_or("QUESTION_COUNT_DEFAULT", 10),
                max_count: parse_env_or("QUESTION_COUNT_MAX", 50),
            },
            llm: env::var("LLM_MODEL").ok().map(|model| LlmConfig {
                model,
                api_key: env::var("LLM_API_KEY").ok(),
                base_url: env::var("LLM_BASE_URL").ok(),
                timeout_secs: parse_env_or("LLM_TIMEOUT", 30),
                max_retries: parse_env_or("LLM_MAX_RETRIES", 3),
            }),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Known LLM providers that use OpenAI-compatible APIs
pub const KNOWN_LLM_PROVIDERS: &[&str] = &["openai", "openrouter", "ollama", "lmstudio"];

/// Parse an LLM model name into (provider, model) tuple.
pub fn parse_llm_provider_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_LLM_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    // Default to treating the whole string as a local model
    ("local", model)
}
