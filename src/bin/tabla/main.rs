//! tabla - a terminal hype-man with a synthesized tabla
//!
//! Run with: cargo run --bin tabla
//! Logs go to tabla.log (RUST_LOG to filter) since the UI owns the terminal.

mod app;
mod ui;

use std::{fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tabla_dsp::{hype::gemini::GeminiClient, AudioEngine, EngineConfig};
use tracing_subscriber::EnvFilter;

use app::App;

const LOG_FILE: &str = "tabla.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build tokio runtime")?;
    let local = tokio::task::LocalSet::new();

    let engine = AudioEngine::new(EngineConfig::default());
    let client = GeminiClient::from_env();
    tracing::info!(model = client.model(), "starting tabla");

    let mut terminal = ratatui::init();
    let result = local.block_on(&runtime, App::new(engine, client).run(&mut terminal));
    ratatui::restore();

    result
}

fn init_logging() -> EyreResult<()> {
    let file = File::create(LOG_FILE).wrap_err("failed to create log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
