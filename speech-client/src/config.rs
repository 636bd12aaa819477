use std::env;

use crate::error::SpeechError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Reads `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, SpeechError> {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err(SpeechError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}
