mod client;
mod config;
mod error;
mod request;

pub use client::SpeechClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::SpeechError;
pub use request::{AudioFormat, SpeechRequest};
