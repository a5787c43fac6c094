use thiserror::Error;

/// Failures of the audio side.
///
/// Device errors only ever surface from `AudioContext::open_default`; the
/// engine logs them and carries on silent.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no default output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("failed to pause output stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),
    #[error("no audio context")]
    NoContext,
    #[error("render queue is full")]
    QueueFull,
}

/// Failures of the encouragement text service.
///
/// None of these reach the user: `hype::get_encouragement` swaps them for a
/// fallback line.
#[derive(Error, Debug)]
pub enum HypeError {
    #[error("no API key configured")]
    MissingApiKey,
    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("text generation unavailable: {0}")]
    Unavailable(String),
}
