//! Wire representation of a quiz: the JSON the provider is asked to produce
//! and the JSON export.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::MalformedQuizError;
use crate::models::domain::quiz::AnswerKeyEntry;
use crate::models::domain::quiz_question::{QuestionKind, QuestionType, QuizQuestion};
use crate::models::domain::Quiz;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizDto {
    pub questions: Vec<QuizQuestionDto>,
    pub answer_key: Vec<AnswerKeyDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestionDto {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub topic: String,
    pub question: String,
    /// Only present for MCQ questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct AnswerKeyDto {
    pub question: String,
    pub answer: String,
}

impl From<&QuizQuestion> for QuizQuestionDto {
    fn from(question: &QuizQuestion) -> Self {
        let options = match &question.kind {
            QuestionKind::MultipleChoice { options } => Some(options.clone()),
            QuestionKind::FillInBlank | QuestionKind::OpenEnded => None,
        };

        QuizQuestionDto {
            question_type: question.question_type(),
            topic: question.topic.clone(),
            question: question.question.clone(),
            options,
            answer: question.answer.clone(),
        }
    }
}

impl From<&Quiz> for QuizDto {
    fn from(quiz: &Quiz) -> Self {
        QuizDto {
            questions: quiz.questions().iter().map(QuizQuestionDto::from).collect(),
            answer_key: quiz
                .answer_key()
                .iter()
                .map(|entry| AnswerKeyDto {
                    question: entry.question.clone(),
                    answer: entry.answer.clone(),
                })
                .collect(),
        }
    }
}

impl QuizQuestionDto {
    fn into_question(self, index: usize) -> Result<QuizQuestion, MalformedQuizError> {
        let kind = match self.question_type {
            QuestionType::Mcq => QuestionKind::MultipleChoice {
                options: self
                    .options
                    .ok_or(MalformedQuizError::MissingOptions { index })?,
            },
            // Stray options on other types are dropped.
            QuestionType::FillInBlank => QuestionKind::FillInBlank,
            QuestionType::OpenEnded => QuestionKind::OpenEnded,
        };

        Ok(QuizQuestion {
            kind,
            topic: self.topic,
            question: self.question,
            answer: self.answer,
        })
    }
}

impl TryFrom<QuizDto> for Quiz {
    type Error = MalformedQuizError;

    fn try_from(dto: QuizDto) -> Result<Self, Self::Error> {
        let questions = dto
            .questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| q.into_question(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let answer_key = dto
            .answer_key
            .into_iter()
            .map(|entry| AnswerKeyEntry {
                question: entry.question,
                answer: entry.answer,
            })
            .collect();

        Quiz::new(questions, answer_key)
    }
}
