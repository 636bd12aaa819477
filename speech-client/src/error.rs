#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}
