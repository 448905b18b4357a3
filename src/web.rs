use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::prompt::SummaryType;
use crate::summarize::{GeminiClient, summarize};
use crate::youtube::fetch_transcript;
use crate::{Error, TranscriptStats, VideoId, resolve};

/// Shared handler state: explicit configuration and clients, built once at
/// startup. No mutable state — every request runs its pipeline from scratch.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub gemini: GeminiClient,
    pub preferred_langs: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/summarize", post(summarize_video))
        .route("/api/transcript/{video_id}", get(download_transcript))
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    pub summary_type: SummaryType,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub video_id: VideoId,
    pub language: String,
    pub summary: String,
    pub transcript: String,
    pub truncated: bool,
    pub stats: TranscriptStats,
}

/// The whole pipeline for one user action: resolve the URL, fetch the
/// transcript, summarize it. Runs to completion sequentially; any failure is
/// rendered as a JSON error body, never retried.
async fn summarize_video(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let video_id = resolve(&req.url)?;
    info!("Summarize request: video={video_id} type={}", req.summary_type);

    let transcript = fetch_transcript(&state.http, &video_id, &state.preferred_langs).await?;
    debug!(
        "Transcript fetched: {} words, language {}, truncated={}",
        transcript.stats.words, transcript.language, transcript.truncated
    );

    let summary = summarize(&state.gemini, &transcript, req.summary_type, req.instructions.as_deref()).await?;

    Ok(Json(SummarizeResponse {
        video_id: transcript.video_id.clone(),
        language: transcript.language.clone(),
        summary,
        truncated: transcript.truncated,
        stats: transcript.stats,
        transcript: transcript.text,
    }))
}

/// Plain-text transcript download. Nothing is stored between requests, so
/// the transcript is fetched again here.
async fn download_transcript(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, ApiError> {
    let video_id = resolve(&video_id)?;
    let transcript = fetch_transcript(&state.http, &video_id, &state.preferred_langs).await?;

    let disposition = format!("attachment; filename=\"{}\"", transcript.download_filename());
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        transcript.text,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Wrapper mapping the error taxonomy onto HTTP responses at the handler
/// boundary.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        Error::VideoUnavailable(_) | Error::TranscriptsDisabled(_) | Error::NoTranscriptAvailable(_) => {
            StatusCode::NOT_FOUND
        }
        Error::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
        Error::ModelApi(_) | Error::Http(_) | Error::Provider(_) | Error::CaptionParse(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        debug!("Request failed ({status}): {}", self.0);
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
