// src/handlers/meta.rs

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

/// Service banner with the endpoint map.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Interview Preparation API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate_questions": "/api/questions/generate",
            "submit_answer": "/api/answers/submit",
            "mock_interview": "/api/mock-interview",
            "user_progress": "/api/progress/{user_id}",
            "interview_tips": "/api/interview-tips/{question_type}"
        }
    }))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}
