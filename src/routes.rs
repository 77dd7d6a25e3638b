// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{answers, interview, meta, progress, questions, tips},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (questions, answers, mock-interview, progress, tips).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (registries + LLM gateway).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let question_routes = Router::new().route("/generate", post(questions::generate));

    let answer_routes = Router::new().route("/submit", post(answers::submit));

    let interview_routes = Router::new()
        .route("/start", post(interview::start))
        .route("/{id}/begin", post(interview::begin))
        .route("/{id}/submit-answer", post(interview::submit_answer))
        .route("/{id}/complete", post(interview::complete));

    let progress_routes = Router::new().route("/{user_id}", get(progress::get_progress));

    let tips_routes = Router::new().route("/{question_type}", get(tips::get_tips));

    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .nest("/api/questions", question_routes)
        .nest("/api/answers", answer_routes)
        .nest("/api/mock-interview", interview_routes)
        .nest("/api/progress", progress_routes)
        .nest("/api/interview-tips", tips_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
