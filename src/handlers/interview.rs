// src/handlers/interview.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        answer::AnswerSubmission,
        interview::{InterviewStatus, MockInterview, MockInterviewRequest, RecordedAnswer},
    },
    state::AppState,
};

/// Question load per requested type: ten questions split evenly, never
/// fewer than two per type.
fn questions_per_type(type_count: usize) -> usize {
    std::cmp::max(2, 10 / type_count)
}

/// Creates a mock-interview session and returns it with its complete
/// question list; the client gets every question up front, not drip-fed.
pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<MockInterviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let per_type = questions_per_type(payload.question_types.len());

    let mut all_questions = Vec::new();
    for question_type in &payload.question_types {
        let questions = state
            .gateway
            .generate_questions(&payload.role, *question_type, payload.difficulty, per_type, None)
            .await;
        all_questions.extend(questions);
    }

    let interview = MockInterview::new(payload.role, all_questions);
    state
        .interviews
        .insert(interview.interview_id.clone(), interview.clone())
        .await;

    tracing::info!(
        interview_id = %interview.interview_id,
        questions = interview.questions.len(),
        "mock interview created"
    );

    Ok(Json(interview))
}

/// Marks the session as in progress and stamps the start time.
///
/// Re-begin is allowed and simply resets the stamp; the session registry
/// never enforces transition order, it only logs the anomaly.
pub async fn begin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let previous_status = state
        .interviews
        .update(&id, |interview| {
            let previous = interview.status;
            interview.status = InterviewStatus::InProgress;
            interview.start_time = Some(Utc::now());
            previous
        })
        .await
        .ok_or(AppError::NotFound("Interview not found".to_string()))?;

    if previous_status != InterviewStatus::NotStarted {
        tracing::warn!(
            interview_id = %id,
            ?previous_status,
            "interview re-begun; start time reset"
        );
    }

    Ok(Json(json!({
        "message": "Interview started",
        "interview_id": id,
    })))
}

/// Submits an answer during a mock interview.
///
/// The question id is resolved against the global question registry, not
/// the session's own list, so any previously generated question is
/// accepted. The evaluation runs outside the registry lock; only the
/// final record insertion holds it.
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<impl IntoResponse, AppError> {
    state
        .interviews
        .get(&id)
        .await
        .ok_or(AppError::NotFound("Interview not found".to_string()))?;

    let question = state
        .questions
        .get(&submission.question_id)
        .await
        .ok_or(AppError::NotFound("Question not found".to_string()))?;

    let feedback = state
        .gateway
        .evaluate_answer(&question, &submission.user_answer)
        .await;

    let recorded = RecordedAnswer {
        answer: submission.user_answer,
        feedback: feedback.clone(),
        time_taken: submission.time_taken_seconds,
    };

    state
        .interviews
        .update(&id, |interview| {
            if interview.status != InterviewStatus::InProgress {
                tracing::warn!(
                    interview_id = %interview.interview_id,
                    status = ?interview.status,
                    "answer recorded outside an in-progress session"
                );
            }
            interview.answers.insert(submission.question_id, recorded);
        })
        .await
        .ok_or(AppError::NotFound("Interview not found".to_string()))?;

    Ok(Json(feedback))
}

/// Completes the session: flips the status, stamps the end time, and
/// folds the recorded answers into the aggregate summary.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state
        .interviews
        .update(&id, |interview| {
            interview.status = InterviewStatus::Completed;
            interview.end_time = Some(Utc::now());
            interview.summarize()
        })
        .await
        .ok_or(AppError::NotFound("Interview not found".to_string()))?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::questions_per_type;

    #[test]
    fn question_load_splits_ten_across_types_with_a_floor_of_two() {
        assert_eq!(questions_per_type(1), 10);
        assert_eq!(questions_per_type(2), 5);
        assert_eq!(questions_per_type(3), 3);
        assert_eq!(questions_per_type(4), 2);
        assert_eq!(questions_per_type(5), 2);
        assert_eq!(questions_per_type(8), 2);
    }
}
