use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

use voxbridge::audio::{CaptureSettings, MicrophoneCapture};
use voxbridge::pipeline::{CycleOutcome, Pipeline, PipelineOptions};
use voxbridge::recognize::HttpRecognizer;
use voxbridge::store::{LocalSink, MongoStore};
use voxbridge::translate::HttpTranslator;
use voxbridge::Config;

#[derive(Parser, Debug)]
#[command(name = "voxbridge", about = "Capture speech, translate it, archive it")]
struct Cli {
    /// Configuration file (without extension, config-crate style)
    #[arg(short, long, default_value = "config/voxbridge")]
    config: String,

    /// Override the capture timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Override the recognition language hint (e.g., "hi-IN")
    #[arg(long)]
    language_hint: Option<String>,

    /// Override the translation target language (e.g., "en")
    #[arg(long)]
    target_language: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Setup failures (bad config, unreachable store, missing microphone) are
    // the only non-zero exits
    let pipeline = match setup(&cli).await {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Setup failed: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline.run_cycle().await {
        Ok(CycleOutcome::Completed {
            record_id,
            audio_blob,
        }) => {
            info!("Cycle complete: record {} (audio blob {})", record_id, audio_blob);
        }
        Ok(CycleOutcome::NoSpeech) => info!("No speech detected"),
        Ok(CycleOutcome::NoText) => info!("No valid text to translate"),
        Err(e) => error!("Cycle aborted: {}", e),
    }

    ExitCode::SUCCESS
}

async fn setup(cli: &Cli) -> Result<Pipeline> {
    let mut cfg = Config::load(&cli.config).context("failed to load configuration")?;

    if let Some(timeout) = cli.timeout {
        cfg.capture.timeout_secs = timeout;
    }
    if let Some(hint) = &cli.language_hint {
        cfg.recognition.language_hint = hint.clone();
    }
    if let Some(target) = &cli.target_language {
        cfg.translation.target_language = target.clone();
    }

    info!("voxbridge v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Language pair: {} -> {}",
        cfg.recognition.language_hint, cfg.translation.target_language
    );

    let capture = MicrophoneCapture::new(CaptureSettings {
        calibration_ms: cfg.capture.calibration_ms,
        silence_hold_ms: cfg.capture.silence_hold_ms,
    })
    .context("failed to open audio device")?;

    let recognizer = HttpRecognizer::new(
        cfg.recognition.service_url.clone(),
        cfg.recognition.timeout_secs,
    )?;
    let translator = HttpTranslator::new(
        cfg.translation.service_url.clone(),
        cfg.translation.timeout_secs,
    )?;

    let store = MongoStore::connect(
        &cfg.storage.uri,
        &cfg.storage.database,
        &cfg.storage.collection,
    )
    .await
    .context("failed to connect to document store")?;

    let local = LocalSink::new(&cfg.storage.output_dir)
        .context("failed to create output directory")?;

    let options = PipelineOptions {
        capture_timeout: Duration::from_secs(cfg.capture.timeout_secs),
        language_hint: cfg.recognition.language_hint.clone(),
        target_language: cfg.translation.target_language.clone(),
        store_orphan_audio: cfg.storage.store_orphan_audio,
    };

    Ok(Pipeline::new(
        Box::new(capture),
        Box::new(recognizer),
        Box::new(translator),
        Box::new(store),
        local,
        options,
    ))
}
