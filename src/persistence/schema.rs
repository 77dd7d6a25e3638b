// src/persistence/schema.rs

//! Row types for the relational schema, one struct per table, with
//! conversions from the live in-memory records. A migration job drains
//! the registries through these conversions; nothing in the request path
//! uses them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::interview::{InterviewStatus, MockInterview, RecordedAnswer};
use crate::models::progress::UserProgress;
use crate::models::question::Question;

/// Represents the 'users' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub name: String,

    /// One of 'free', 'basic', 'premium', 'enterprise'.
    pub subscription_tier: String,

    pub created_at: Option<DateTime<Utc>>,
    pub last_active: Option<DateTime<Utc>>,
}

/// Represents the 'user_progress' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserProgressRow {
    pub id: i64,
    pub user_id: String,
    pub total_questions_attempted: i64,
    pub total_time_spent_minutes: i64,
    pub average_score: f64,
    pub questions_by_type: Json<HashMap<String, i64>>,
    pub strengths: Json<Vec<String>>,
    pub weaknesses: Json<Vec<String>>,
    pub improvement_trend: Json<Vec<f64>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserProgressRow {
    pub fn from_record(progress: &UserProgress) -> Self {
        Self {
            id: 0,
            user_id: progress.user_id.clone(),
            total_questions_attempted: progress.total_questions_attempted as i64,
            total_time_spent_minutes: 0,
            average_score: progress.average_score,
            questions_by_type: Json(
                progress
                    .questions_by_type
                    .iter()
                    .map(|(t, n)| (t.to_string(), *n as i64))
                    .collect(),
            ),
            strengths: Json(progress.strengths.clone()),
            weaknesses: Json(progress.weaknesses.clone()),
            improvement_trend: Json(progress.improvement_trend.clone()),
            last_updated: Some(Utc::now()),
        }
    }
}

/// Represents the 'questions' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionRow {
    pub id: String,
    pub question_text: String,
    pub question_type: String,
    pub difficulty: String,

    /// Role the question was generated for ("Software Engineer", ...).
    pub role: String,

    pub topics: Json<Vec<String>>,
    pub expected_answer_points: Json<Vec<String>>,
    pub follow_up_questions: Json<Vec<String>>,
    pub model_answer: Option<String>,
    pub usage_count: i64,
    pub average_score: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,

    /// 'system' for generated questions, 'custom' for user-contributed.
    pub created_by: Option<String>,

    pub is_active: bool,
}

impl QuestionRow {
    /// The in-memory record does not carry the role it was generated
    /// for; the migration job supplies it from request context.
    pub fn from_record(question: &Question, role: &str) -> Self {
        Self {
            id: question.id.clone(),
            question_text: question.question.clone(),
            question_type: question.question_type.to_string(),
            difficulty: question.difficulty.to_string(),
            role: role.to_string(),
            topics: Json(question.topics.clone()),
            expected_answer_points: Json(question.expected_answer_points.clone()),
            follow_up_questions: Json(question.follow_up_questions.clone()),
            model_answer: None,
            usage_count: 0,
            average_score: None,
            created_at: Some(Utc::now()),
            created_by: Some("system".to_string()),
            is_active: true,
        }
    }
}

/// Represents the 'interviews' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InterviewRow {
    pub id: String,
    pub user_id: Option<String>,
    pub role: String,

    /// One of 'not_started', 'in_progress', 'completed', 'cancelled'.
    /// 'cancelled' exists only here; no HTTP operation reaches it.
    pub status: String,

    pub duration_minutes: Option<i64>,
    pub difficulty: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub overall_score: Option<f64>,
    pub performance_summary: Option<Json<serde_json::Value>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl InterviewRow {
    pub fn from_session(session: &MockInterview, user_id: Option<&str>) -> Self {
        let summary = (session.status == InterviewStatus::Completed).then(|| session.summarize());

        Self {
            id: session.interview_id.clone(),
            user_id: user_id.map(str::to_string),
            role: session.role.clone(),
            status: match session.status {
                InterviewStatus::NotStarted => "not_started",
                InterviewStatus::InProgress => "in_progress",
                InterviewStatus::Completed => "completed",
            }
            .to_string(),
            duration_minutes: None,
            difficulty: None,
            start_time: session.start_time,
            end_time: session.end_time,
            overall_score: summary.as_ref().map(|s| s.overall_score),
            performance_summary: summary.as_ref().map(|s| {
                Json(serde_json::json!({
                    "average_score": s.performance_summary.average_score,
                    "highest_score": s.performance_summary.highest_score,
                    "lowest_score": s.performance_summary.lowest_score,
                }))
            }),
            created_at: Some(Utc::now()),
        }
    }
}

/// Represents the 'interview_questions' junction table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InterviewQuestionRow {
    pub id: i64,
    pub interview_id: String,
    pub question_id: String,

    /// Question order within the interview.
    pub position: i64,
}

/// Represents the 'answers' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AnswerRow {
    pub id: String,
    pub user_id: Option<String>,
    pub question_id: Option<String>,
    pub interview_question_id: Option<i64>,
    pub answer_text: String,
    pub score: Option<f64>,
    pub time_taken_seconds: Option<i64>,
    pub strengths: Json<Vec<String>>,
    pub areas_for_improvement: Json<Vec<String>>,
    pub detailed_feedback: Option<String>,
    pub suggested_resources: Json<Vec<String>>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl AnswerRow {
    pub fn from_recorded(question_id: &str, recorded: &RecordedAnswer) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: None,
            question_id: Some(question_id.to_string()),
            interview_question_id: None,
            answer_text: recorded.answer.clone(),
            score: Some(recorded.feedback.score),
            time_taken_seconds: recorded.time_taken,
            strengths: Json(recorded.feedback.strengths.clone()),
            areas_for_improvement: Json(recorded.feedback.areas_for_improvement.clone()),
            detailed_feedback: Some(recorded.feedback.detailed_feedback.clone()),
            suggested_resources: Json(recorded.feedback.suggested_resources.clone()),
            submitted_at: Some(Utc::now()),
        }
    }
}

/// Represents the 'api_keys' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ApiKeyRow {
    pub id: String,
    pub user_id: String,
    pub key_hash: String,
    pub name: Option<String>,
    pub is_active: bool,

    /// Requests per hour.
    pub rate_limit: i64,

    pub requests_used: i64,
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Represents the 'question_bank' table of pre-generated questions.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuestionBankRow {
    pub id: i64,
    pub role: String,
    pub question_type: String,
    pub difficulty: String,
    pub topic: Option<String>,

    /// Complete question object, ready to serve without a generation call.
    pub question_data: Json<serde_json::Value>,

    pub created_at: Option<DateTime<Utc>>,
    pub last_used: Option<DateTime<Utc>>,
}

/// Represents the 'analytics' table of API usage events.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub id: i64,
    pub user_id: Option<String>,
    pub endpoint: String,
    pub response_time_ms: Option<i64>,
    pub status_code: Option<i64>,
    pub error_message: Option<String>,
    pub metadata: Option<Json<serde_json::Value>>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer::AnswerFeedback;
    use crate::models::question::{DifficultyLevel, QuestionType};

    fn question() -> Question {
        Question {
            id: "q-1".to_string(),
            question: "Explain indexes.".to_string(),
            question_type: QuestionType::Technical,
            difficulty: DifficultyLevel::Hard,
            topics: vec!["databases".to_string()],
            expected_answer_points: vec!["B-trees".to_string()],
            follow_up_questions: vec!["Covering indexes?".to_string()],
        }
    }

    #[test]
    fn question_row_flattens_the_live_record() {
        let row = QuestionRow::from_record(&question(), "Backend Engineer");

        assert_eq!(row.id, "q-1");
        assert_eq!(row.question_type, "technical");
        assert_eq!(row.difficulty, "hard");
        assert_eq!(row.role, "Backend Engineer");
        assert_eq!(row.topics.0, vec!["databases"]);
        assert_eq!(row.created_by.as_deref(), Some("system"));
        assert!(row.is_active);
    }

    #[test]
    fn interview_row_carries_summary_only_when_completed() {
        let mut session = MockInterview::new("Engineer", vec![question()]);
        let fresh = InterviewRow::from_session(&session, None);
        assert_eq!(fresh.status, "not_started");
        assert!(fresh.overall_score.is_none());
        assert!(fresh.performance_summary.is_none());

        session.status = InterviewStatus::Completed;
        session.answers.insert(
            "q-1".to_string(),
            RecordedAnswer {
                answer: "B-trees keep lookups logarithmic.".to_string(),
                feedback: AnswerFeedback {
                    score: 90.0,
                    strengths: vec!["accurate".to_string()],
                    areas_for_improvement: vec![],
                    detailed_feedback: "Good.".to_string(),
                    suggested_resources: vec![],
                    model_answer: "...".to_string(),
                },
                time_taken: Some(60),
            },
        );

        let done = InterviewRow::from_session(&session, Some("user-1"));
        assert_eq!(done.status, "completed");
        assert_eq!(done.overall_score, Some(90.0));
        assert_eq!(done.user_id.as_deref(), Some("user-1"));
        let summary = done.performance_summary.unwrap();
        assert_eq!(summary.0["highest_score"], 90.0);
    }

    #[test]
    fn answer_row_preserves_the_recorded_feedback() {
        let recorded = RecordedAnswer {
            answer: "my answer".to_string(),
            feedback: AnswerFeedback {
                score: 42.0,
                strengths: vec!["tried".to_string()],
                areas_for_improvement: vec!["study".to_string()],
                detailed_feedback: "Needs work.".to_string(),
                suggested_resources: vec!["book".to_string()],
                model_answer: "model".to_string(),
            },
            time_taken: Some(90),
        };

        let row = AnswerRow::from_recorded("q-1", &recorded);
        assert_eq!(row.question_id.as_deref(), Some("q-1"));
        assert_eq!(row.score, Some(42.0));
        assert_eq!(row.time_taken_seconds, Some(90));
        assert_eq!(row.strengths.0, vec!["tried"]);
    }

    #[test]
    fn progress_row_stringifies_type_keys() {
        let progress = UserProgress::empty("user-9");
        let row = UserProgressRow::from_record(&progress);

        assert_eq!(row.user_id, "user-9");
        assert_eq!(row.questions_by_type.0.len(), 4);
        assert_eq!(row.questions_by_type.0.get("system_design"), Some(&0));
    }
}
