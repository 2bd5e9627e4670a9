//! Prompt construction for the question-generation call.

/// Build the prompt asking the model for exactly `count` multiple-choice
/// questions over `corpus`. The model must answer with a bare JSON array
/// so the response parses straight into question records.
pub fn build_question_prompt(corpus: &str, count: u32) -> String {
    format!(
        r#"Create exactly {count} multiple choice questions from the study material below.

Rules:
- Each question tests one concrete fact or concept from the material.
- Provide exactly 4 answer options per question; only one is correct.
- Keep questions and answers short and unambiguous.
- Respond with ONLY a valid JSON array, no prose, in this shape:
  [{{"question": "...", "answers": ["A", "B", "C", "D"], "correctAnswer": 1, "timeLimit": 20}}]
- "correctAnswer" is the 1-based index of the correct option.

Study material:
{corpus}"#
    )
}
