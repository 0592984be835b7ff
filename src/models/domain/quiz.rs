use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::MalformedQuizError;
use crate::models::domain::quiz_question::{QuestionKind, QuizQuestion};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    pub question: String,
    pub answer: String,
}

/// A generated quiz: questions plus an answer key of the same length, in the
/// same order. Built once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    answer_key: Vec<AnswerKeyEntry>,
}

impl Quiz {
    pub fn new(
        questions: Vec<QuizQuestion>,
        answer_key: Vec<AnswerKeyEntry>,
    ) -> Result<Self, MalformedQuizError> {
        if questions.is_empty() {
            return Err(MalformedQuizError::NoQuestions);
        }
        if questions.len() != answer_key.len() {
            return Err(MalformedQuizError::AnswerKeyLength {
                questions: questions.len(),
                answers: answer_key.len(),
            });
        }

        for (index, (question, entry)) in questions.iter().zip(&answer_key).enumerate() {
            let number = index + 1;
            if question.question.trim().is_empty() {
                return Err(MalformedQuizError::EmptyField { index: number, field: "question" });
            }
            if question.answer.trim().is_empty() {
                return Err(MalformedQuizError::EmptyField { index: number, field: "answer" });
            }
            if let QuestionKind::MultipleChoice { options } = &question.kind {
                if options.is_empty() {
                    return Err(MalformedQuizError::MissingOptions { index: number });
                }
            }
            if entry.question.trim() != question.question.trim() {
                return Err(MalformedQuizError::AnswerKeyMismatch { index: number });
            }
        }

        Ok(Self {
            questions,
            answer_key,
        })
    }

    /// Builds the answer key from the questions themselves.
    pub fn from_questions(questions: Vec<QuizQuestion>) -> Result<Self, MalformedQuizError> {
        let answer_key = questions
            .iter()
            .map(|q| AnswerKeyEntry {
                question: q.question.clone(),
                answer: q.answer.clone(),
            })
            .collect();
        Self::new(questions, answer_key)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answer_key(&self) -> &[AnswerKeyEntry] {
        &self.answer_key
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A quiz as held by the session, tagged so clients can tell when it was replaced.
#[derive(Clone, Debug)]
pub struct GeneratedQuiz {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub quiz: Quiz,
}

impl GeneratedQuiz {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            quiz,
        }
    }
}
