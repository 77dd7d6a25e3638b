// src/handlers/progress.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, models::progress::UserProgress, state::AppState};

/// Returns the user's aggregate statistics.
///
/// Unknown users get a zero-valued record, never a 404. Nothing in the
/// live request path writes to this registry yet.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let progress = state
        .progress
        .get(&user_id)
        .await
        .unwrap_or_else(|| UserProgress::empty(user_id));

    Ok(Json(progress))
}
