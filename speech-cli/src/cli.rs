use speech_client::AudioFormat;

/// Generate speech from text via an OpenAI-compatible TTS endpoint.
#[derive(clap::Parser)]
pub struct Cli {
    /// Text prompt to synthesize into speech.
    pub text: String,
    /// Output file name without extension.
    #[arg(short, long, default_value = "speech")]
    pub output: String,
    /// Audio format to request from the API.
    #[arg(long, default_value_t = AudioFormat::Wav)]
    pub format: AudioFormat,
}
