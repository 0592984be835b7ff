use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "Fill-in-the-blank")]
    FillInBlank,
    #[serde(rename = "Open-ended")]
    OpenEnded,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Mcq,
        QuestionType::FillInBlank,
        QuestionType::OpenEnded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::FillInBlank => "Fill-in-the-blank",
            QuestionType::OpenEnded => "Open-ended",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shape of a question. Only multiple choice carries options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String> },
    FillInBlank,
    OpenEnded,
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::MultipleChoice { .. } => QuestionType::Mcq,
            QuestionKind::FillInBlank => QuestionType::FillInBlank,
            QuestionKind::OpenEnded => QuestionType::OpenEnded,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            QuestionKind::MultipleChoice { options } => options,
            QuestionKind::FillInBlank | QuestionKind::OpenEnded => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub topic: String,
    pub question: String,
    pub answer: String,
}

impl QuizQuestion {
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    pub fn options(&self) -> &[String] {
        self.kind.options()
    }

    /// `(<type>) [<topic>] <question>`, the PDF question line.
    pub fn heading(&self) -> String {
        format!("({}) [{}] {}", self.question_type(), self.topic, self.question)
    }
}
