use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::quiz_question::QuestionType;
use crate::models::domain::quiz_request::{
    split_topics, ClassLevel, Difficulty, QuizRequest, DEFAULT_QUESTION_COUNT,
};

/// Body of `POST /api/quiz`, mirroring the quiz form. Missing fields fall back
/// to the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct GenerateQuizRequestDto {
    #[serde(default = "default_class_levels")]
    pub class_levels: Vec<ClassLevel>,

    /// Comma-separated free text, e.g. `Photosynthesis, Respiration`.
    #[validate(length(min = 1, max = 1000))]
    #[serde(default = "default_topics")]
    pub topics: String,

    #[validate(length(min = 1, message = "Select at least one question type"))]
    #[serde(default = "default_question_types")]
    pub question_types: Vec<QuestionType>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[validate(range(min = 2, max = 50))]
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

impl Default for GenerateQuizRequestDto {
    fn default() -> Self {
        Self {
            class_levels: default_class_levels(),
            topics: default_topics(),
            question_types: default_question_types(),
            difficulty: Difficulty::default(),
            question_count: default_question_count(),
        }
    }
}

fn default_class_levels() -> Vec<ClassLevel> {
    vec![ClassLevel::JhsOne]
}

fn default_topics() -> String {
    "Photosynthesis, Respiration".to_string()
}

fn default_question_types() -> Vec<QuestionType> {
    vec![QuestionType::Mcq]
}

fn default_question_count() -> u32 {
    u32::from(DEFAULT_QUESTION_COUNT)
}

impl TryFrom<GenerateQuizRequestDto> for QuizRequest {
    type Error = AppError;

    fn try_from(dto: GenerateQuizRequestDto) -> Result<Self, Self::Error> {
        dto.validate()?;

        let request = QuizRequest::new(
            dto.class_levels,
            split_topics(&dto.topics),
            dto.question_types,
            dto.difficulty,
            dto.question_count,
        )?;
        Ok(request)
    }
}
