#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use jesi_quiz_server::{
    config::Config,
    errors::ProviderError,
    services::quiz_client::QuizClient,
};

/// Replays canned provider replies in order and records every prompt.
pub struct ScriptedQuizClient {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedQuizClient {
    pub fn new(replies: Vec<Result<String, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl QuizClient for ScriptedQuizClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().await.push(prompt.to_string());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(ProviderError::EmptyCompletion))
    }
}

pub fn config() -> Config {
    Config::from_lookup(|key| (key == "OPENAI_API_KEY").then(|| "sk-test".to_string()))
        .expect("test config")
}

pub fn photosynthesis_reply(count: usize) -> String {
    let questions: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "type": "MCQ",
                "topic": "Photosynthesis",
                "question": format!("{n}. What is the main product of photosynthesis?"),
                "options": ["Glucose", "Protein", "Fat", "Salt"],
                "answer": "Glucose"
            })
        })
        .collect();
    let answer_key: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "question": format!("{n}. What is the main product of photosynthesis?"),
                "answer": "Glucose"
            })
        })
        .collect();
    json!({ "questions": questions, "answer_key": answer_key }).to_string()
}

pub fn mixed_reply() -> String {
    json!({
        "questions": [
            {
                "type": "MCQ",
                "topic": "Photosynthesis",
                "question": "Which pigment absorbs light?",
                "options": ["Chlorophyll", "Keratin", "Melanin", "Haemoglobin"],
                "answer": "Chlorophyll"
            },
            {
                "type": "Fill-in-the-blank",
                "topic": "Respiration",
                "question": "Respiration takes place in the ____.",
                "answer": "mitochondria"
            },
            {
                "type": "Open-ended",
                "topic": "Respiration",
                "question": "Explain why muscles get tired during a race.",
                "answer": "Lactic acid builds up during anaerobic respiration."
            }
        ],
        "answer_key": [
            { "question": "Which pigment absorbs light?", "answer": "Chlorophyll" },
            { "question": "Respiration takes place in the ____.", "answer": "mitochondria" },
            {
                "question": "Explain why muscles get tired during a race.",
                "answer": "Lactic acid builds up during anaerobic respiration."
            }
        ]
    })
    .to_string()
}
