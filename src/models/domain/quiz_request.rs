use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::domain::quiz_question::QuestionType;

pub const MIN_QUESTION_COUNT: u8 = 2;
pub const MAX_QUESTION_COUNT: u8 = 50;
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum ClassLevel {
    #[serde(rename = "Class one")]
    ClassOne,
    #[serde(rename = "Class two")]
    ClassTwo,
    #[serde(rename = "Class three")]
    ClassThree,
    #[serde(rename = "Class four")]
    ClassFour,
    #[serde(rename = "Class five")]
    ClassFive,
    #[serde(rename = "Class six")]
    ClassSix,
    #[serde(rename = "JHS one")]
    JhsOne,
    #[serde(rename = "JHS two")]
    JhsTwo,
    #[serde(rename = "JHS three")]
    JhsThree,
    #[serde(rename = "SHS one")]
    ShsOne,
    #[serde(rename = "SHS two")]
    ShsTwo,
    #[serde(rename = "SHS three")]
    ShsThree,
}

impl ClassLevel {
    pub const ALL: [ClassLevel; 12] = [
        ClassLevel::ClassOne,
        ClassLevel::ClassTwo,
        ClassLevel::ClassThree,
        ClassLevel::ClassFour,
        ClassLevel::ClassFive,
        ClassLevel::ClassSix,
        ClassLevel::JhsOne,
        ClassLevel::JhsTwo,
        ClassLevel::JhsThree,
        ClassLevel::ShsOne,
        ClassLevel::ShsTwo,
        ClassLevel::ShsThree,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClassLevel::ClassOne => "Class one",
            ClassLevel::ClassTwo => "Class two",
            ClassLevel::ClassThree => "Class three",
            ClassLevel::ClassFour => "Class four",
            ClassLevel::ClassFive => "Class five",
            ClassLevel::ClassSix => "Class six",
            ClassLevel::JhsOne => "JHS one",
            ClassLevel::JhsTwo => "JHS two",
            ClassLevel::JhsThree => "JHS three",
            ClassLevel::ShsOne => "SHS one",
            ClassLevel::ShsTwo => "SHS two",
            ClassLevel::ShsThree => "SHS three",
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizRequestError {
    #[error("at least one topic is required")]
    NoTopics,

    #[error("at least one question type is required")]
    NoQuestionTypes,

    #[error("question count must be between 2 and 50, got {0}")]
    QuestionCountOutOfRange(u32),
}

/// Parameters of one generation request.
///
/// Only constructible through [`QuizRequest::new`], so a value in hand always
/// has topics, at least one question type and an in-range question count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    class_levels: Vec<ClassLevel>,
    topics: Vec<String>,
    question_types: Vec<QuestionType>,
    difficulty: Difficulty,
    question_count: u8,
}

impl QuizRequest {
    pub fn new(
        class_levels: Vec<ClassLevel>,
        topics: Vec<String>,
        question_types: Vec<QuestionType>,
        difficulty: Difficulty,
        question_count: u32,
    ) -> Result<Self, QuizRequestError> {
        let topics: Vec<String> = dedup_in_order(
            topics
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        );
        if topics.is_empty() {
            return Err(QuizRequestError::NoTopics);
        }

        let question_types = dedup_in_order(question_types);
        if question_types.is_empty() {
            return Err(QuizRequestError::NoQuestionTypes);
        }

        let question_count = u8::try_from(question_count)
            .ok()
            .filter(|c| (MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(c))
            .ok_or(QuizRequestError::QuestionCountOutOfRange(question_count))?;

        Ok(Self {
            class_levels: dedup_in_order(class_levels),
            topics,
            question_types,
            difficulty,
            question_count,
        })
    }

    pub fn class_levels(&self) -> &[ClassLevel] {
        &self.class_levels
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn question_types(&self) -> &[QuestionType] {
        &self.question_types
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }
}

/// Splits the comma-separated topics field of the form.
pub fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_in_order<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
