use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini-tts";
pub const DEFAULT_VOICE: &str = "alloy";
pub const DEFAULT_INSTRUCTIONS: &str = "Speak in a cheerful and positive tone.";

/// Audio container/codec requested from the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Wav,
    Mp3,
    Opus,
    Flac,
}

impl AudioFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Flac => "flac",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wav" => Ok(Self::Wav),
            "mp3" => Ok(Self::Mp3),
            "opus" => Ok(Self::Opus),
            "flac" => Ok(Self::Flac),
            other => Err(format!(
                "unknown audio format {other:?} (expected wav, mp3, opus or flac)"
            )),
        }
    }
}

/// Payload for `POST /audio/speech`. The field names are the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
    pub instructions: String,
    pub response_format: AudioFormat,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>, format: AudioFormat) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            input: input.into(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            response_format: format,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_exact_wire_fields() {
        let request = SpeechRequest::new("Hello world", AudioFormat::Mp3);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "gpt-4o-mini-tts",
                "voice": "alloy",
                "input": "Hello world",
                "instructions": "Speak in a cheerful and positive tone.",
                "response_format": "mp3",
            })
        );
    }

    #[test]
    fn builder_overrides_replace_defaults() {
        let request = SpeechRequest::new("hi", AudioFormat::Wav)
            .model("tts-1")
            .voice("nova")
            .instructions("Whisper.");

        assert_eq!(request.model, "tts-1");
        assert_eq!(request.voice, "nova");
        assert_eq!(request.instructions, "Whisper.");
    }

    #[test]
    fn format_parses_known_names_only() {
        assert_eq!("wav".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert_eq!("opus".parse::<AudioFormat>().unwrap(), AudioFormat::Opus);
        assert!("ogg".parse::<AudioFormat>().is_err());
        assert!("WAV".parse::<AudioFormat>().is_err());
    }

    #[test]
    fn format_display_matches_extension() {
        assert_eq!(AudioFormat::Flac.to_string(), "flac");
        assert_eq!(AudioFormat::Flac.extension(), "flac");
    }
}
