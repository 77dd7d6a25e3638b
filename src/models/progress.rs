// src/models/progress.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::question::QuestionType;

/// Aggregate practice statistics for one user.
///
/// The live request path only ever reads these records; nothing updates
/// them yet. Unknown users get the zero-valued default instead of a
/// not-found error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: String,
    pub total_questions_attempted: u64,
    pub questions_by_type: HashMap<QuestionType, u64>,
    pub average_score: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_trend: Vec<f64>,
}

impl UserProgress {
    /// Zero-valued record for users the service has never seen.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            total_questions_attempted: 0,
            questions_by_type: QuestionType::ALL.iter().map(|t| (*t, 0)).collect(),
            average_score: 0.0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            improvement_trend: Vec::new(),
        }
    }
}
