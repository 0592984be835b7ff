use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        quiz_client::{OpenAiQuizClient, QuizClient},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiQuizClient::new(&config));
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Arc<dyn QuizClient>) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(client)),
            config: Arc::new(config),
        }
    }
}
