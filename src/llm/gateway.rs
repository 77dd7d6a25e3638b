// src/llm/gateway.rs

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use crate::config::Config;
use crate::models::answer::AnswerFeedback;
use crate::models::question::{DifficultyLevel, Question, QuestionType};
use crate::store::QuestionStore;

use super::client::{ChatCompletion, ChatRequest, LlmError, OpenAiClient};
use super::{fallback, prompts};

/// Shape the generation prompt asks the model to produce for each question.
#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    question: String,
    expected_answer_points: Vec<String>,
    topics: Vec<String>,
    follow_up_questions: Vec<String>,
}

/// Front door to the external generation service.
///
/// Every operation resolves to usable content: a single attempt against
/// the service, and on any failure the deterministic fallback content
/// instead. No retries, no backoff. The degrade is logged at warn level
/// but invisible in the response shape.
///
/// Generated questions (fallback ones included) are registered in the
/// question registry before they are returned, so answer submission can
/// look them up later.
#[derive(Clone)]
pub struct LlmGateway {
    backend: Arc<dyn ChatCompletion>,
    questions: QuestionStore,
}

impl LlmGateway {
    pub fn new(config: &Config, questions: QuestionStore) -> Self {
        Self::with_backend(Arc::new(OpenAiClient::new(config)), questions)
    }

    /// Builds a gateway over an alternate transport (scripted in tests).
    pub fn with_backend(backend: Arc<dyn ChatCompletion>, questions: QuestionStore) -> Self {
        Self { backend, questions }
    }

    /// Generates `count` questions, registers them, and returns them in
    /// the order received. Falls back to template questions on any
    /// upstream failure; the fallback yields at most 3.
    pub async fn generate_questions(
        &self,
        role: &str,
        question_type: QuestionType,
        difficulty: DifficultyLevel,
        count: usize,
        topics: Option<&[String]>,
    ) -> Vec<Question> {
        match self
            .request_questions(role, question_type, difficulty, count, topics)
            .await
        {
            Ok(questions) => questions,
            Err(err) => {
                tracing::warn!(
                    %question_type,
                    "question generation degraded to fallback content: {}",
                    err
                );
                let questions = fallback::questions(question_type, difficulty, count);
                for question in &questions {
                    self.questions.insert(question.id.clone(), question.clone()).await;
                }
                questions
            }
        }
    }

    async fn request_questions(
        &self,
        role: &str,
        question_type: QuestionType,
        difficulty: DifficultyLevel,
        count: usize,
        topics: Option<&[String]>,
    ) -> Result<Vec<Question>, LlmError> {
        let content = self
            .backend
            .complete(ChatRequest {
                system: prompts::GENERATION_SYSTEM_PROMPT,
                user: prompts::generation_prompt(role, question_type, difficulty, count, topics),
                temperature: 0.7,
            })
            .await?;

        let generated: Vec<GeneratedQuestion> =
            serde_json::from_str(&content).map_err(|err| LlmError::Decode(err.to_string()))?;

        if generated.is_empty() {
            return Err(LlmError::Decode("empty question list".to_string()));
        }
        if generated.iter().any(|q| {
            q.topics.is_empty() || q.expected_answer_points.is_empty() || q.follow_up_questions.is_empty()
        }) {
            return Err(LlmError::Decode(
                "question with empty topics, answer points or follow-ups".to_string(),
            ));
        }

        let mut questions = Vec::with_capacity(count.min(generated.len()));
        for item in generated.into_iter().take(count) {
            let question = Question {
                id: Uuid::new_v4().to_string(),
                question: item.question,
                question_type,
                difficulty,
                topics: item.topics,
                expected_answer_points: item.expected_answer_points,
                follow_up_questions: item.follow_up_questions,
            };
            self.questions.insert(question.id.clone(), question.clone()).await;
            questions.push(question);
        }

        Ok(questions)
    }

    /// Scores an answer against a question. Falls back to the fixed
    /// mediocre evaluation on any upstream failure.
    pub async fn evaluate_answer(&self, question: &Question, user_answer: &str) -> AnswerFeedback {
        match self.request_feedback(question, user_answer).await {
            Ok(feedback) => feedback,
            Err(err) => {
                tracing::warn!(
                    question_id = %question.id,
                    "answer evaluation degraded to fallback content: {}",
                    err
                );
                fallback::feedback()
            }
        }
    }

    async fn request_feedback(
        &self,
        question: &Question,
        user_answer: &str,
    ) -> Result<AnswerFeedback, LlmError> {
        let content = self
            .backend
            .complete(ChatRequest {
                system: prompts::EVALUATION_SYSTEM_PROMPT,
                user: prompts::evaluation_prompt(question, user_answer),
                temperature: 0.5,
            })
            .await?;

        let feedback: AnswerFeedback =
            serde_json::from_str(&content).map_err(|err| LlmError::Decode(err.to_string()))?;

        if !(0.0..=100.0).contains(&feedback.score) {
            return Err(LlmError::Decode(format!(
                "score {} outside [0, 100]",
                feedback.score
            )));
        }

        Ok(feedback)
    }

    /// Fetches tips for a question type; static tips on failure.
    pub async fn interview_tips(&self, question_type: QuestionType) -> String {
        let request = ChatRequest {
            system: prompts::TIPS_SYSTEM_PROMPT,
            user: prompts::tips_prompt(question_type),
            temperature: 0.7,
        };

        match self.backend.complete(request).await {
            Ok(tips) => tips.trim().to_string(),
            Err(err) => {
                tracing::warn!(
                    %question_type,
                    "tip generation degraded to fallback content: {}",
                    err
                );
                fallback::tips().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Transport that always answers with the scripted text, or always
    /// fails when no text is given.
    struct Scripted(Option<&'static str>);

    #[async_trait]
    impl ChatCompletion for Scripted {
        async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
            match self.0 {
                Some(reply) => Ok(reply.to_string()),
                None => Err(LlmError::MissingApiKey),
            }
        }
    }

    fn make_gateway(reply: Option<&'static str>) -> (LlmGateway, QuestionStore) {
        let store = QuestionStore::new();
        let gateway = LlmGateway::with_backend(Arc::new(Scripted(reply)), store.clone());
        (gateway, store)
    }

    fn sample_question() -> Question {
        Question {
            id: "q1".to_string(),
            question: "Explain caching.".to_string(),
            question_type: QuestionType::Technical,
            difficulty: DifficultyLevel::Medium,
            topics: vec!["caching".to_string()],
            expected_answer_points: vec!["eviction".to_string()],
            follow_up_questions: vec!["What about invalidation?".to_string()],
        }
    }

    const TWO_QUESTIONS: &str = r#"[
        {"question": "What is a B-tree?",
         "expected_answer_points": ["balanced", "fan-out"],
         "topics": ["data structures"],
         "follow_up_questions": ["Compare with LSM trees"]},
        {"question": "Explain TCP slow start.",
         "expected_answer_points": ["congestion window", "doubling"],
         "topics": ["networking"],
         "follow_up_questions": ["What triggers fast retransmit?"]}
    ]"#;

    #[tokio::test]
    async fn decodes_and_registers_generated_questions() {
        let (gateway, store) = make_gateway(Some(TWO_QUESTIONS));

        let questions = gateway
            .generate_questions(
                "Software Engineer",
                QuestionType::Technical,
                DifficultyLevel::Medium,
                5,
                None,
            )
            .await;

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is a B-tree?");
        assert_eq!(questions[0].question_type, QuestionType::Technical);
        assert_ne!(questions[0].id, questions[1].id);
        assert_eq!(store.len().await, 2);
        assert!(store.get(&questions[1].id).await.is_some());
    }

    #[tokio::test]
    async fn truncates_surplus_questions_to_requested_count() {
        let (gateway, store) = make_gateway(Some(TWO_QUESTIONS));

        let questions = gateway
            .generate_questions(
                "Software Engineer",
                QuestionType::Technical,
                DifficultyLevel::Easy,
                1,
                None,
            )
            .await;

        assert_eq!(questions.len(), 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_templates() {
        let (gateway, store) = make_gateway(None);

        let questions = gateway
            .generate_questions(
                "Software Engineer",
                QuestionType::Behavioral,
                DifficultyLevel::Medium,
                5,
                None,
            )
            .await;

        assert_eq!(questions.len(), 3);
        for question in &questions {
            assert_eq!(question.topics, vec!["general"]);
        }
        // Fallback questions are registered too.
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn malformed_json_falls_back_to_templates() {
        let (gateway, _store) = make_gateway(Some("Sure! Here are your questions: 1. ..."));

        let questions = gateway
            .generate_questions(
                "Software Engineer",
                QuestionType::SystemDesign,
                DifficultyLevel::Hard,
                2,
                None,
            )
            .await;

        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.topics == vec!["general"]));
    }

    #[tokio::test]
    async fn empty_list_fields_fall_back_to_templates() {
        let reply = r#"[{"question": "Q?", "expected_answer_points": [],
                         "topics": ["t"], "follow_up_questions": ["f"]}]"#;
        let (gateway, _store) = make_gateway(Some(reply));

        let questions = gateway
            .generate_questions(
                "Software Engineer",
                QuestionType::Technical,
                DifficultyLevel::Medium,
                2,
                None,
            )
            .await;

        assert!(questions.iter().all(|q| q.topics == vec!["general"]));
    }

    #[tokio::test]
    async fn decodes_feedback_from_service() {
        let reply = r#"{
            "score": 88.5,
            "strengths": ["clear structure"],
            "areas_for_improvement": ["more depth"],
            "detailed_feedback": "Good answer overall.",
            "suggested_resources": ["CLRS"],
            "model_answer": "A model answer."
        }"#;
        let (gateway, _store) = make_gateway(Some(reply));

        let feedback = gateway.evaluate_answer(&sample_question(), "LRU caches...").await;

        assert_eq!(feedback.score, 88.5);
        assert_eq!(feedback.strengths, vec!["clear structure"]);
    }

    #[tokio::test]
    async fn out_of_range_score_falls_back_to_fixed_feedback() {
        let reply = r#"{
            "score": 140,
            "strengths": ["s"],
            "areas_for_improvement": ["a"],
            "detailed_feedback": "d",
            "suggested_resources": ["r"],
            "model_answer": "m"
        }"#;
        let (gateway, _store) = make_gateway(Some(reply));

        let feedback = gateway.evaluate_answer(&sample_question(), "answer").await;

        assert_eq!(feedback.score, 75.0);
        assert_eq!(feedback.strengths[0], "Attempted to answer the question");
    }

    #[tokio::test]
    async fn evaluation_failure_is_indistinguishable_mediocre_feedback() {
        let (gateway, _store) = make_gateway(None);

        let feedback = gateway.evaluate_answer(&sample_question(), "answer").await;

        assert_eq!(feedback.score, 75.0);
        assert!(!feedback.model_answer.is_empty());
    }

    #[tokio::test]
    async fn tips_are_trimmed_on_success_and_static_on_failure() {
        let (gateway, _store) = make_gateway(Some("  1. Know the platform.\n2. Ask questions.  "));
        let tips = gateway.interview_tips(QuestionType::Hr).await;
        assert_eq!(tips, "1. Know the platform.\n2. Ask questions.");

        let (gateway, _store) = make_gateway(None);
        let tips = gateway.interview_tips(QuestionType::Hr).await;
        assert!(tips.starts_with("1. Practice regularly"));
    }
}
