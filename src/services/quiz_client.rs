use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::{Config, GENERATION_TEMPERATURE};
use crate::constants::quiz_prompt::QUIZ_SYSTEM_PROMPT;
use crate::errors::ProviderError;

/// Sends a prompt to the text-generation provider and hands back the raw completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Chat-completion client for OpenAI and OpenAI-compatible endpoints.
pub struct OpenAiQuizClient {
    client: Client<OpenAIConfig>,
    model: String,
    json_mode: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiQuizClient {
    pub fn new(config: &Config) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(api_base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            json_mode: config.openai_json_mode,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "model": self.model,
            "temperature": GENERATION_TEMPERATURE,
            "messages": [
                { "role": "system", "content": QUIZ_SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ]
        });
        if self.json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }
}

#[async_trait]
impl QuizClient for OpenAiQuizClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        log::debug!(
            "Sending quiz prompt to model {} ({} chars)",
            self.model,
            prompt.len()
        );

        let completion: ChatCompletion = self
            .client
            .chat()
            .create_byot(self.request_body(prompt))
            .await
            .map_err(provider_error)?;

        completion_text(completion)
    }
}

fn completion_text(completion: ChatCompletion) -> Result<String, ProviderError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ProviderError::EmptyCompletion)
}

fn provider_error(err: OpenAIError) -> ProviderError {
    match err {
        OpenAIError::ApiError(api) => {
            let auth_failure = api.r#type.as_deref() == Some("authentication_error")
                || api.message.contains("API key");
            if auth_failure {
                ProviderError::Authentication(api.message)
            } else {
                ProviderError::Api(api.message)
            }
        }
        other => ProviderError::Transport(other.to_string()),
    }
}
