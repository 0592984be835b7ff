use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::quiz::GeneratedQuiz;
use crate::models::domain::quiz_question::QuestionType;
use crate::models::domain::quiz_request::{
    ClassLevel, Difficulty, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};
use crate::models::dto::request::GenerateQuizRequestDto;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

/// What the quiz page shows: numbered questions, and the answer key once revealed.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub answers_revealed: bool,
    pub questions: Vec<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<Vec<AnswerKeyView>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub topic: String,
    pub question: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerKeyView {
    pub number: usize,
    pub question: String,
    pub answer: String,
}

impl QuizView {
    pub fn new(generated: &GeneratedQuiz, answers_revealed: bool) -> Self {
        let quiz = &generated.quiz;

        let questions = quiz
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionView {
                number: i + 1,
                question_type: q.question_type(),
                topic: q.topic.clone(),
                question: q.question.clone(),
                options: q.options().to_vec(),
            })
            .collect();

        let answer_key = answers_revealed.then(|| {
            quiz.answer_key()
                .iter()
                .enumerate()
                .map(|(i, entry)| AnswerKeyView {
                    number: i + 1,
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                })
                .collect()
        });

        QuizView {
            id: generated.id,
            generated_at: generated.generated_at,
            answers_revealed,
            questions,
            answer_key,
        }
    }
}

/// The fixed choices offered by the quiz form.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptionsDto {
    pub class_levels: Vec<ClassLevel>,
    pub question_types: Vec<QuestionType>,
    pub difficulties: Vec<Difficulty>,
    pub min_question_count: u8,
    pub max_question_count: u8,
    pub defaults: GenerateQuizRequestDto,
}

impl Default for FormOptionsDto {
    fn default() -> Self {
        Self {
            class_levels: ClassLevel::ALL.to_vec(),
            question_types: QuestionType::ALL.to_vec(),
            difficulties: Difficulty::ALL.to_vec(),
            min_question_count: MIN_QUESTION_COUNT,
            max_question_count: MAX_QUESTION_COUNT,
            defaults: GenerateQuizRequestDto::default(),
        }
    }
}
