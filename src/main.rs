use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::info;

mod cli;

use cli::Cli;
use ytsum::summarize::Summarizer;
use ytsum::transcript;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging()?;

    let cli = <Cli as clap::Parser>::parse();

    // The API key is read once at startup and injected into the summarizer.
    let api_key = std::env::var("OPENROUTER_API_KEY")
        .map_err(|_| eyre::eyre!("OPENROUTER_API_KEY environment variable not set"))?;

    let config_path = cli.config.clone().unwrap_or_else(ytsum::config::config_path);

    // The config is consulted up front only for the language default; the
    // model list itself is re-read on every summarization attempt.
    let default_lang = ytsum::config::Config::load(&config_path)
        .ok()
        .and_then(|c| c.default_lang);
    let lang = cli.lang.clone().or(default_lang).unwrap_or_else(|| "en".to_string());

    let client = reqwest::Client::new();
    let summarizer = Summarizer::new(client.clone(), api_key);

    // Collect inputs: from arg or stdin
    let inputs = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if inputs.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    let mut failures = 0usize;

    for input in &inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let resolution = ytsum::resolve(input).map_err(|e| {
            let ytsum::ResolveError::InvalidIdentifier { ref url_warning, .. } = e;
            if let Some(w) = url_warning {
                eprintln!("Warning: {w}");
            }
            eyre::eyre!(
                "{e}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  <11-character video ID>"
            )
        })?;

        if let Some(ref w) = resolution.url_warning {
            eprintln!("Warning: {w}");
        }
        let video_id = resolution.id;

        if cli.verbose {
            eprintln!("Extracted video ID: {video_id}");
        }
        info!("Summarizing video {video_id} (lang={lang}, length={})", cli.length);

        let transcript_text = match transcript::fetch_transcript(&client, &video_id, &lang).await {
            Ok(text) => text,
            Err(e) if e.is_unavailable() => {
                eprintln!("No transcript for {video_id}: {e}");
                failures += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if cli.verbose {
            eprintln!("Fetched transcript: {} characters", transcript_text.len());
        }
        if cli.show_transcript {
            println!("{transcript_text}\n");
        }

        match summarizer.summarize(&transcript_text, cli.length, &config_path).await {
            Ok(summary) => {
                if let Some(ref path) = cli.output {
                    std::fs::write(path, &summary)?;
                    if cli.verbose {
                        eprintln!("Summary written to: {}", path.display());
                    }
                } else {
                    println!("{summary}");
                }
            }
            Err(e) => {
                eprintln!("Failed to generate summary for {video_id}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} input(s) produced no summary");
    }

    Ok(())
}
