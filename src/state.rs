// src/state.rs

use axum::extract::FromRef;

use crate::config::Config;
use crate::llm::LlmGateway;
use crate::store::{InterviewStore, ProgressStore, QuestionStore};

/// Shared application state: the three in-memory registries plus the
/// gateway to the external generation service.
///
/// The gateway holds a clone of the question registry so questions are
/// registered at generation time, whichever endpoint triggered it.
#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionStore,
    pub interviews: InterviewStore,
    pub progress: ProgressStore,
    pub gateway: LlmGateway,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let questions = QuestionStore::new();
        let gateway = LlmGateway::new(&config, questions.clone());

        Self {
            questions,
            interviews: InterviewStore::new(),
            progress: ProgressStore::new(),
            gateway,
            config,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
