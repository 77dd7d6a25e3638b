// src/llm/prompts.rs

//! Prompt templates for the external generation service.
//!
//! Three call sites: question generation, answer evaluation, and
//! per-type interview tips. The first two instruct the model to answer
//! in JSON; the decode step in the gateway enforces the shape.

use crate::models::question::{DifficultyLevel, Question, QuestionType};

pub const GENERATION_SYSTEM_PROMPT: &str =
    "You are an expert technical interviewer and career coach.";

pub const EVALUATION_SYSTEM_PROMPT: &str =
    "You are an expert interview evaluator providing constructive feedback.";

pub const TIPS_SYSTEM_PROMPT: &str =
    "You are a career coach specializing in interview preparation.";

/// Instruction requesting `count` questions as a JSON array.
pub fn generation_prompt(
    role: &str,
    question_type: QuestionType,
    difficulty: DifficultyLevel,
    count: usize,
    topics: Option<&[String]>,
) -> String {
    let topics_clause = match topics {
        Some(topics) if !topics.is_empty() => format!(" focusing on {}", topics.join(", ")),
        _ => String::new(),
    };

    format!(
        r#"Generate {count} {difficulty} {question_type} interview questions for a {role} position{topics_clause}.

For each question, provide:
1. The question itself
2. 3-5 key points that should be in a good answer
3. 2-3 relevant topics/skills tested
4. 2 follow-up questions

Return the response as a JSON array with this structure:
[
  {{
    "question": "...",
    "expected_answer_points": ["point1", "point2", ...],
    "topics": ["topic1", "topic2"],
    "follow_up_questions": ["followup1", "followup2"]
  }}
]"#
    )
}

/// Instruction requesting an evaluation of `user_answer` as a JSON object.
pub fn evaluation_prompt(question: &Question, user_answer: &str) -> String {
    format!(
        r#"Evaluate this interview answer:

Question: {question}
Expected key points: {points}
User's Answer: {user_answer}

Provide a detailed evaluation with:
1. Score (0-100)
2. 2-3 specific strengths
3. 2-3 areas for improvement
4. Detailed feedback paragraph
5. 2-3 suggested learning resources
6. A model answer

Return as JSON:
{{
  "score": 85,
  "strengths": ["...", "..."],
  "areas_for_improvement": ["...", "..."],
  "detailed_feedback": "...",
  "suggested_resources": ["...", "..."],
  "model_answer": "..."
}}"#,
        question = question.question,
        points = question.expected_answer_points.join(", "),
    )
}

/// Instruction requesting 5 tips for a question type, as plain text.
pub fn tips_prompt(question_type: QuestionType) -> String {
    format!(
        "Provide 5 expert tips for answering {question_type} interview questions effectively. \
         Make them actionable and specific."
    )
}
