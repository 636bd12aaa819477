use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::SpeechError;
use crate::request::SpeechRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct SpeechClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpeechClient {
    pub fn new(config: &Config) -> Result<Self, SpeechError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Sends one synthesis request and returns the raw audio bytes.
    #[tracing::instrument(skip(self, request), fields(format = %request.response_format))]
    pub async fn synthesize(&self, request: &SpeechRequest) -> Result<Bytes, SpeechError> {
        let url = format!("{}/audio/speech", self.base_url);

        // send the request
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status,
                message: error_message(&body),
            });
        }

        let audio = response.bytes().await?;
        tracing::debug!(bytes = audio.len(), "received synthesized audio");

        Ok(audio)
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::error_message;

    #[test]
    fn extracts_nested_error_message() {
        let body = r#"{"error":{"message":"bad input","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body), "bad input");
    }

    #[test]
    fn falls_back_to_raw_body_when_not_json() {
        assert_eq!(error_message("upstream exploded"), "upstream exploded");
    }

    #[test]
    fn falls_back_when_message_is_empty() {
        let body = r#"{"error":{"message":""}}"#;
        assert_eq!(error_message(body), body);
    }
}
