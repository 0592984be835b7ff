use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::quiz_request::QuizRequestError;

/// Startup configuration problems. Fatal: the server refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set. Add it to the environment or a .env file")]
    MissingVariable(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failures talking to the text-generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider rejected the credentials: {0}")]
    Authentication(String),

    #[error("provider returned an error: {0}")]
    Api(String),

    #[error("request to provider failed: {0}")]
    Transport(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Provider output that is not a usable quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedQuizError {
    #[error("response is empty")]
    Empty,

    #[error("response does not contain a JSON object")]
    NoJsonObject,

    #[error("response is not valid quiz JSON: {0}")]
    InvalidJson(String),

    #[error("quiz contains no questions")]
    NoQuestions,

    #[error("question {index} is multiple choice but has no options")]
    MissingOptions { index: usize },

    #[error("question {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("answer key has {answers} entries for {questions} questions")]
    AnswerKeyLength { questions: usize, answers: usize },

    #[error("answer key entry {index} does not match its question")]
    AnswerKeyMismatch { index: usize },
}

/// Everything that can go wrong between submitting a request and holding a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Malformed(#[from] MalformedQuizError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("CSV rendering failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to generate quiz: {0}")]
    Generation(#[from] GenerationError),

    #[error("A quiz is already being generated")]
    GenerationInProgress,

    #[error("No quiz has been generated yet")]
    NoQuiz,

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationInProgress => StatusCode::CONFLICT,
            AppError::NoQuiz => StatusCode::CONFLICT,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<QuizRequestError> for AppError {
    fn from(err: QuizRequestError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Generation(err.into())
    }
}

impl From<MalformedQuizError> for AppError {
    fn from(err: MalformedQuizError) -> Self {
        AppError::Generation(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("quiz".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ProviderError::EmptyCompletion).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(AppError::NoQuiz.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::GenerationInProgress.status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn provider_and_parse_failures_share_one_user_message() {
        let provider = AppError::from(ProviderError::Transport("connection reset".into()));
        let malformed = AppError::from(MalformedQuizError::NoJsonObject);

        assert_eq!(
            provider.to_string(),
            "Failed to generate quiz: request to provider failed: connection reset"
        );
        assert_eq!(
            malformed.to_string(),
            "Failed to generate quiz: response does not contain a JSON object"
        );
    }

    #[test]
    fn generation_error_keeps_cause_distinct() {
        let err: GenerationError = MalformedQuizError::Empty.into();
        assert!(matches!(err, GenerationError::Malformed(MalformedQuizError::Empty)));

        let err: GenerationError = ProviderError::Authentication("bad key".into()).into();
        assert!(matches!(err, GenerationError::Provider(ProviderError::Authentication(_))));
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::MissingVariable("OPENAI_API_KEY");
        assert!(err.to_string().starts_with("OPENAI_API_KEY is not set"));
    }
}
