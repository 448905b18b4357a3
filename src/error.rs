use thiserror::Error;

/// Everything that can go wrong between a pasted URL and a rendered summary.
///
/// The first four variants are user-correctable or video-specific; the model
/// variants are opaque passthroughs from the inference service. None of these
/// are retried — the user re-triggers the action manually.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a recognized YouTube URL or video ID: {0}")]
    InvalidUrl(String),

    #[error("video {0} is unavailable (private, deleted, or region-blocked)")]
    VideoUnavailable(String),

    #[error("captions are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("no transcript track exists for video {0}")]
    NoTranscriptAvailable(String),

    #[error("model API error: {0}")]
    ModelApi(String),

    #[error("model API quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected transcript provider response: {0}")]
    Provider(String),

    #[error("error parsing caption XML: {0}")]
    CaptionParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
