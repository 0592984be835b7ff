use crate::errors::ExportError;
use crate::models::domain::Quiz;
use crate::models::dto::quiz_dto::QuizDto;
use crate::services::export::Exporter;

/// Writes the quiz in the provider wire format, pretty-printed.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn file_name(&self) -> &'static str {
        "quiz.json"
    }

    fn render(&self, quiz: &Quiz) -> Result<Vec<u8>, ExportError> {
        Ok(serde_json::to_vec_pretty(&QuizDto::from(quiz))?)
    }
}
