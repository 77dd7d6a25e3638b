// src/handlers/answers.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, models::answer::AnswerSubmission, state::AppState};

/// Submits an answer to a previously generated question and returns the
/// evaluation.
///
/// Any question ever handed out (standalone or inside a mock interview)
/// is accepted; unknown identifiers are a 404.
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let question = state
        .questions
        .get(&submission.question_id)
        .await
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    let feedback = state
        .gateway
        .evaluate_answer(&question, &submission.user_answer)
        .await;

    Ok(Json(feedback))
}
