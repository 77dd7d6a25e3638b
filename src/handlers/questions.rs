// src/handlers/questions.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{error::AppError, models::question::QuestionRequest, state::AppState};

/// Generates interview questions for a role.
///
/// Question authoring is delegated to the external generation service;
/// on upstream failure the response carries deterministic template
/// questions instead, in the same shape.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let questions = state
        .gateway
        .generate_questions(
            &payload.role,
            payload.question_type,
            payload.difficulty,
            payload.count as usize,
            payload.topics.as_deref(),
        )
        .await;

    Ok(Json(questions))
}
