// src/models/interview.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::answer::AnswerFeedback;
use super::question::{DifficultyLevel, Question, QuestionType};

/// Lifecycle state of a mock-interview session.
///
/// Transitions are expected to run not_started -> in_progress ->
/// completed, but the HTTP surface does not reject out-of-order calls;
/// it only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// DTO for starting a mock interview.
#[derive(Debug, Deserialize, Validate)]
pub struct MockInterviewRequest {
    #[validate(length(min = 1, max = 200, message = "Role must not be empty."))]
    pub role: String,

    #[serde(default = "default_duration_minutes")]
    #[validate(range(min = 10, max = 120, message = "Duration must be between 10 and 120 minutes."))]
    pub duration_minutes: u32,

    #[validate(length(min = 1, message = "At least one question type is required."))]
    pub question_types: Vec<QuestionType>,

    #[serde(default)]
    pub difficulty: DifficultyLevel,
}

fn default_duration_minutes() -> u32 {
    30
}

/// An answer recorded against one question of a session. Re-submitting
/// the same question id overwrites the previous record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub answer: String,
    pub feedback: AnswerFeedback,
    pub time_taken: Option<i64>,
}

/// A mock-interview session.
///
/// The `answers` map is internal bookkeeping keyed by question id and is
/// never serialized into responses; clients only ever see the aggregate
/// via [`MockInterview::summarize`].
#[derive(Debug, Clone, Serialize)]
pub struct MockInterview {
    pub interview_id: String,
    pub role: String,
    pub status: InterviewStatus,

    /// The full question list, handed to the client up front.
    pub questions: Vec<Question>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub answers: HashMap<String, RecordedAnswer>,
}

impl MockInterview {
    /// Creates a fresh session in `not_started` with a new identifier.
    pub fn new(role: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            interview_id: Uuid::new_v4().to_string(),
            role: role.into(),
            status: InterviewStatus::NotStarted,
            questions,
            start_time: None,
            end_time: None,
            answers: HashMap::new(),
        }
    }

    /// Folds the recorded answers into the completion summary.
    ///
    /// Pure read over the answer map; all aggregates are 0 when nothing
    /// was answered. Duplicate submissions for a question id count once
    /// because the map is keyed by question id.
    pub fn summarize(&self) -> InterviewSummary {
        let scores: Vec<f64> = self.answers.values().map(|a| a.feedback.score).collect();

        let (average, highest, lowest) = if scores.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let sum: f64 = scores.iter().sum();
            let max = scores.iter().cloned().fold(f64::MIN, f64::max);
            let min = scores.iter().cloned().fold(f64::MAX, f64::min);
            (sum / scores.len() as f64, max, min)
        };

        InterviewSummary {
            interview_id: self.interview_id.clone(),
            status: self.status,
            overall_score: average,
            questions_answered: self.answers.len(),
            total_questions: self.questions.len(),
            performance_summary: PerformanceSummary {
                average_score: average,
                highest_score: highest,
                lowest_score: lowest,
            },
        }
    }
}

/// Aggregate result returned when a session completes.
#[derive(Debug, Serialize)]
pub struct InterviewSummary {
    pub interview_id: String,
    pub status: InterviewStatus,
    pub overall_score: f64,
    pub questions_answered: usize,
    pub total_questions: usize,
    pub performance_summary: PerformanceSummary,
}

#[derive(Debug, Serialize)]
pub struct PerformanceSummary {
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
}
