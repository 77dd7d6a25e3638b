// src/models/question.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Kind of interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Hr,
    SystemDesign,
}

impl QuestionType {
    /// All question types, in the order the progress report lists them.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Technical,
        QuestionType::Behavioral,
        QuestionType::Hr,
        QuestionType::SystemDesign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Hr => "hr",
            QuestionType::SystemDesign => "system_design",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty of a question. Requests default to medium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Medium => "medium",
            DifficultyLevel::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One interview question. Immutable once created; owned by the question
/// registry for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Opaque unique token assigned at creation.
    pub id: String,

    /// The question text itself.
    pub question: String,

    pub question_type: QuestionType,
    pub difficulty: DifficultyLevel,

    /// Topics/skills this question tests (e.g., ["Python", "algorithms"]).
    pub topics: Vec<String>,

    /// Key points a good answer should cover.
    pub expected_answer_points: Vec<String>,

    /// Follow-up questions an interviewer might ask next.
    pub follow_up_questions: Vec<String>,
}

/// DTO for requesting question generation.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRequest {
    /// Job role (e.g., "Software Engineer", "Data Scientist").
    #[validate(length(min = 1, max = 200, message = "Role must not be empty."))]
    pub role: String,

    pub question_type: QuestionType,

    #[serde(default)]
    pub difficulty: DifficultyLevel,

    /// Number of questions to generate.
    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 20, message = "Count must be between 1 and 20."))]
    pub count: u32,

    /// Specific topics to focus on.
    pub topics: Option<Vec<String>>,
}

fn default_question_count() -> u32 {
    5
}
