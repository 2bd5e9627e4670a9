use serde::{Deserialize, Serialize};

fn default_time_limit() -> u32 {
    20
}

/// One generated multiple-choice question. The wire names match what the
/// generation model is asked to produce (`correctAnswer`, `timeLimit`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub answers: Vec<String>,
    /// 1-based index into `answers`
    pub correct_answer: u8,
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
}
