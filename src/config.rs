use std::env;

use secrecy::SecretString;

use crate::errors::ConfigError;

/// Sampling temperature for every generation call.
pub const GENERATION_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_api_base: Option<String>,
    pub openai_json_mode: bool,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Fails when `OPENAI_API_KEY` is missing; the caller is expected to stop
    /// the server in that case.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = non_empty("OPENAI_API_KEY")
            .map(SecretString::from)
            .ok_or(ConfigError::MissingVariable("OPENAI_API_KEY"))?;

        let openai_json_mode = match non_empty("OPENAI_JSON_MODE") {
            None => false,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                key: "OPENAI_JSON_MODE",
                value,
            })?,
        };

        let web_server_port = match non_empty("WEB_SERVER_PORT") {
            None => 8080,
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "WEB_SERVER_PORT",
                value,
            })?,
        };

        Ok(Self {
            openai_api_key,
            openai_model: non_empty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_api_base: non_empty("OPENAI_API_BASE"),
            openai_json_mode,
            web_server_host: non_empty("WEB_SERVER_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port,
            cors_allowed_origin: non_empty("CORS_ALLOWED_ORIGIN"),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_api_base: None,
            openai_json_mode: false,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
