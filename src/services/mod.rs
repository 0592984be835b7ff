pub mod export;
pub mod http_helpers;
pub mod prompt_builder;
pub mod quiz_client;
pub mod quiz_generator;
pub mod quiz_parser;
pub mod quiz_service;
pub mod quiz_session;
