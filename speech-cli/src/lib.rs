use std::fs;

use anyhow::Context;
use clap::Parser;
use speech_client::{AudioFormat, Config, SpeechClient, SpeechRequest};

use crate::cli::Cli;

mod cli;

pub async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    // the credential check happens before any network activity
    let config = Config::from_env()?;
    let client = SpeechClient::new(&config)?;

    let audio = client
        .synthesize(&SpeechRequest::new(args.text, args.format))
        .await?;

    let output_file = output_path(&args.output, args.format);
    fs::write(&output_file, &audio)
        .with_context(|| format!("failed to write {output_file}"))?;

    println!("✔ Audio saved to {output_file}");

    Ok(())
}

/// Appends `.{format}` unless the name already carries that suffix.
fn output_path(output: &str, format: AudioFormat) -> String {
    let suffix = format!(".{}", format.extension());
    if output.to_lowercase().ends_with(&suffix) {
        output.to_string()
    } else {
        format!("{output}{suffix}")
    }
}
