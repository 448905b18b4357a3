pub mod config;
pub mod error;
pub mod prompt;
pub mod summarize;
pub mod web;
pub mod youtube;

use serde::Serialize;

pub use error::{Error, Result};

/// Hard cutoff applied to transcript text before it is sent to the model.
pub const MAX_TRANSCRIPT_CHARS: usize = 30_000;

/// Words-per-minute assumption behind the reading-time estimate.
const READING_WPM: usize = 200;

/// Canonical 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Word/character counts and reading-time estimate for a transcript blob.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TranscriptStats {
    pub words: usize,
    pub chars: usize,
    pub reading_time_minutes: usize,
}

/// Complete transcript for a video: segments concatenated into one blob,
/// annotated with the detected language and statistics. The text is capped at
/// [`MAX_TRANSCRIPT_CHARS`] characters; `truncated` records whether the cap
/// was applied.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: VideoId,
    pub language: String,
    pub text: String,
    pub truncated: bool,
    pub stats: TranscriptStats,
}

impl Transcript {
    /// Build a transcript from provider segments: join texts with single
    /// spaces in timeline order, truncate, and compute statistics on the text
    /// that will actually be sent downstream.
    pub fn assemble(video_id: VideoId, language: String, segments: &[Segment]) -> Self {
        let joined = segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ");
        let (text, truncated) = truncate_chars(joined, MAX_TRANSCRIPT_CHARS);

        let words = text.split_whitespace().count();
        let chars = text.chars().count();
        let stats = TranscriptStats {
            words,
            chars,
            reading_time_minutes: reading_time_minutes(words),
        };

        Transcript {
            video_id,
            language,
            text,
            truncated,
            stats,
        }
    }

    /// Filename for the plain-text download.
    pub fn download_filename(&self) -> String {
        format!("transcript_{}.txt", self.video_id)
    }
}

/// Estimated reading time in whole minutes, rounded up.
fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(READING_WPM)
}

/// Cut `text` to at most `max` characters. The cutoff counts Unicode scalar
/// values, not bytes, so a code point is never split.
fn truncate_chars(text: String, max: usize) -> (String, bool) {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => {
            let mut text = text;
            text.truncate(byte_idx);
            (text, true)
        }
        None => (text, false),
    }
}

/// Extract a canonical video ID from the YouTube URL forms we accept, or a
/// bare 11-character ID. Patterns are tried in priority order; first match
/// wins.
pub fn resolve(input: &str) -> Result<VideoId> {
    let trimmed = input.trim();

    // youtube.com/watch?v=ID (extra query params tolerated)
    if let Some(caps) = regex::Regex::new(r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(trimmed)
    {
        return Ok(VideoId(caps[1].to_string()));
    }

    // youtu.be/ID
    if let Some(caps) = regex::Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(trimmed)
    {
        return Ok(VideoId(caps[1].to_string()));
    }

    // youtube.com/embed/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(trimmed)
    {
        return Ok(VideoId(caps[1].to_string()));
    }

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(trimmed) {
        return Ok(VideoId(trimmed.to_string()));
    }

    Err(Error::InvalidUrl(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_video_id() {
        assert_eq!(resolve("dQw4w9WgXcQ").unwrap().as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(resolve("https://youtu.be/dQw4w9WgXcQ").unwrap().as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            resolve("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_all_forms_agree() {
        let forms = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "dQw4w9WgXcQ",
        ];
        let ids: Vec<_> = forms.iter().map(|f| resolve(f).unwrap()).collect();
        assert!(ids.iter().all(|id| *id == ids[0]));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(resolve("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(resolve(""), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(resolve("  dQw4w9WgXcQ  ").unwrap().as_str(), "dQw4w9WgXcQ");
    }

    fn one_segment(text: &str) -> Vec<Segment> {
        vec![Segment {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }]
    }

    fn vid() -> VideoId {
        resolve("dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn test_assemble_joins_with_single_spaces() {
        let segments = vec![
            Segment {
                text: "Hello world".to_string(),
                start: 0.0,
                duration: 1.5,
            },
            Segment {
                text: "this is a test".to_string(),
                start: 1.5,
                duration: 2.0,
            },
        ];
        let t = Transcript::assemble(vid(), "en".to_string(), &segments);
        assert_eq!(t.text, "Hello world this is a test");
        assert!(!t.truncated);
    }

    #[test]
    fn test_truncation_at_boundary() {
        let t = Transcript::assemble(vid(), "en".to_string(), &one_segment(&"a".repeat(30_000)));
        assert_eq!(t.text.chars().count(), 30_000);
        assert!(!t.truncated);

        let t = Transcript::assemble(vid(), "en".to_string(), &one_segment(&"a".repeat(30_001)));
        assert_eq!(t.text.chars().count(), 30_000);
        assert!(t.truncated);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 'é' is 2 bytes; 30_001 of them must still cut at 30_000 characters.
        let t = Transcript::assemble(vid(), "fr".to_string(), &one_segment(&"é".repeat(30_001)));
        assert_eq!(t.text.chars().count(), 30_000);
        assert!(t.truncated);
    }

    #[test]
    fn test_stats_describe_truncated_text() {
        let t = Transcript::assemble(vid(), "en".to_string(), &one_segment(&"a".repeat(40_000)));
        assert_eq!(t.stats.chars, 30_000);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(400), 2);
        assert_eq!(reading_time_minutes(401), 3);
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
    }

    #[test]
    fn test_word_count() {
        let t = Transcript::assemble(vid(), "en".to_string(), &one_segment("one two three"));
        assert_eq!(t.stats.words, 3);
        assert_eq!(t.stats.reading_time_minutes, 1);
    }

    #[test]
    fn test_download_filename() {
        let t = Transcript::assemble(vid(), "en".to_string(), &[]);
        assert_eq!(t.download_filename(), "transcript_dQw4w9WgXcQ.txt");
    }
}
