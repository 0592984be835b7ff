use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizRequest, dto::response::QuizView},
    services::{
        export::{self, ExportFormat, ExportedFile},
        quiz_client::QuizClient,
        quiz_generator::QuizGenerator,
        quiz_session::QuizSession,
    },
};

/// Owns the quiz session and serializes generations against it.
///
/// Only one generation runs at a time; a second request while one is in
/// flight is rejected rather than queued.
pub struct QuizService {
    generator: QuizGenerator,
    session: RwLock<QuizSession>,
    generation_lock: Mutex<()>,
}

impl QuizService {
    pub fn new(client: Arc<dyn QuizClient>) -> Self {
        Self {
            generator: QuizGenerator::new(client),
            session: RwLock::new(QuizSession::new()),
            generation_lock: Mutex::new(()),
        }
    }

    pub async fn generate(&self, request: QuizRequest) -> AppResult<QuizView> {
        let _guard = self
            .generation_lock
            .try_lock()
            .map_err(|_| AppError::GenerationInProgress)?;

        log::info!(
            "Generating {} questions on {} topic(s) at {} difficulty",
            request.question_count(),
            request.topics().len(),
            request.difficulty()
        );

        let quiz = match self.generator.generate(&request).await {
            Ok(quiz) => quiz,
            Err(err) => {
                log::warn!("Quiz generation failed: {err}");
                return Err(err.into());
            }
        };

        let mut session = self.session.write().await;
        let generated = session.replace_quiz(quiz);
        log::info!(
            "Quiz {} ready with {} questions",
            generated.id,
            generated.quiz.len()
        );

        Ok(QuizView::new(&generated, session.answers_revealed()))
    }

    pub async fn current_view(&self) -> AppResult<QuizView> {
        self.session
            .read()
            .await
            .view()
            .ok_or_else(|| AppError::NotFound("No quiz has been generated yet".to_string()))
    }

    pub async fn reveal_answers(&self) -> AppResult<QuizView> {
        let mut session = self.session.write().await;
        if !session.reveal_answers() {
            return Err(AppError::NoQuiz);
        }
        session.view().ok_or(AppError::NoQuiz)
    }

    pub async fn export(&self, format: ExportFormat) -> AppResult<ExportedFile> {
        let generated = self
            .session
            .read()
            .await
            .current()
            .ok_or_else(|| AppError::NotFound("No quiz to export".to_string()))?;

        let file = export::export(&generated.quiz, format)?;
        log::info!(
            "Exported quiz {} as {format} ({} bytes)",
            generated.id,
            file.bytes.len()
        );
        Ok(file)
    }
}
