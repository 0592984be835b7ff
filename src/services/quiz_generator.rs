use std::sync::Arc;

use crate::errors::GenerationError;
use crate::models::domain::{Quiz, QuizRequest};
use crate::services::prompt_builder::PromptBuilder;
use crate::services::quiz_client::QuizClient;
use crate::services::quiz_parser::QuizParser;

/// Prompt, provider call and parse, in that order. No retries.
pub struct QuizGenerator {
    client: Arc<dyn QuizClient>,
}

impl QuizGenerator {
    pub fn new(client: Arc<dyn QuizClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, request: &QuizRequest) -> Result<Quiz, GenerationError> {
        let prompt = PromptBuilder::build(request);
        let raw = self.client.generate(&prompt).await?;
        let quiz = QuizParser::parse(&raw)?;

        if quiz.len() != usize::from(request.question_count()) {
            log::warn!(
                "Provider returned {} questions, {} were requested",
                quiz.len(),
                request.question_count()
            );
        }
        Ok(quiz)
    }
}
