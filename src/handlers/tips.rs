// src/handlers/tips.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppError, models::question::QuestionType, state::AppState};

/// Returns coaching tips for one question type.
///
/// Tips come from the generation service; on failure the caller still
/// gets the static five-tip list in the same shape.
pub async fn get_tips(
    State(state): State<AppState>,
    Path(question_type): Path<QuestionType>,
) -> Result<impl IntoResponse, AppError> {
    let tips = state.gateway.interview_tips(question_type).await;

    Ok(Json(json!({
        "question_type": question_type,
        "tips": tips,
    })))
}
