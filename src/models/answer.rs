// src/models/answer.rs

use serde::{Deserialize, Serialize};

/// DTO for submitting an answer, standalone or inside a mock interview.
#[derive(Debug, Deserialize)]
pub struct AnswerSubmission {
    pub question_id: String,
    pub user_answer: String,
    pub time_taken_seconds: Option<i64>,
}

/// Evaluation of one submitted answer.
///
/// Produced once per submission and returned to the caller; a copy lands
/// in the owning session's answer map when submitted mid-interview. The
/// shape is identical whether the evaluation came from the generation
/// service or from the static fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerFeedback {
    /// Score in [0, 100].
    pub score: f64,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub detailed_feedback: String,
    pub suggested_resources: Vec<String>,
    pub model_answer: String,
}
