use serde::{Deserialize, Serialize};

use crate::Transcript;

/// The four summary styles offered by the UI dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    Comprehensive,
    KeyPoints,
    QuickOverview,
    DetailedAnalysis,
}

impl SummaryType {
    /// Fixed instruction string handed to the model for this style.
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryType::Comprehensive => {
                "Provide a detailed, comprehensive summary covering all major topics and subtopics."
            }
            SummaryType::KeyPoints => {
                "Extract and list the key points and main takeaways in bullet format."
            }
            SummaryType::QuickOverview => "Provide a brief, concise overview in 3-4 sentences.",
            SummaryType::DetailedAnalysis => {
                "Provide an in-depth analysis including themes, arguments, and insights."
            }
        }
    }
}

impl std::fmt::Display for SummaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryType::Comprehensive => write!(f, "Comprehensive"),
            SummaryType::KeyPoints => write!(f, "Key Points"),
            SummaryType::QuickOverview => write!(f, "Quick Overview"),
            SummaryType::DetailedAnalysis => write!(f, "Detailed Analysis"),
        }
    }
}

/// Build the full prompt for a transcript: analyst framing, the selected
/// task instruction, any user-supplied instructions (literal "None" when
/// absent), and the transcript text tagged with its language.
pub fn build_prompt(transcript: &Transcript, summary_type: SummaryType, instructions: Option<&str>) -> String {
    let instructions = match instructions {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => "None",
    };

    format!(
        "You are an expert video content analyst. \n\
         **Task:** {task}\n\
         **Additional User Instructions:** {instructions}\n\
         **Video Transcript (Language: {language}):**\n\
         {text}\n\
         Please provide a well-structured response with clear sections and formatting.",
        task = summary_type.instruction(),
        language = transcript.language,
        text = transcript.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Segment, resolve};

    fn sample_transcript() -> Transcript {
        let segments = vec![Segment {
            text: "Hello world this is a talk".to_string(),
            start: 0.0,
            duration: 2.0,
        }];
        Transcript::assemble(resolve("dQw4w9WgXcQ").unwrap(), "English".to_string(), &segments)
    }

    #[test]
    fn test_summary_type_from_ui_value() {
        let t: SummaryType = serde_json::from_str(r#""key_points""#).unwrap();
        assert_eq!(t, SummaryType::KeyPoints);
    }

    #[test]
    fn test_instructions_are_distinct() {
        let all = [
            SummaryType::Comprehensive,
            SummaryType::KeyPoints,
            SummaryType::QuickOverview,
            SummaryType::DetailedAnalysis,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.instruction(), b.instruction());
            }
        }
    }

    #[test]
    fn test_build_prompt_embeds_parts() {
        let t = sample_transcript();
        let prompt = build_prompt(&t, SummaryType::KeyPoints, Some("Focus on technical details"));
        assert!(prompt.contains(SummaryType::KeyPoints.instruction()));
        assert!(prompt.contains("Focus on technical details"));
        assert!(prompt.contains("Language: English"));
        assert!(prompt.contains("Hello world this is a talk"));
    }

    #[test]
    fn test_build_prompt_frame_opening() {
        // Opening line keeps its trailing space before the newline.
        let prompt = build_prompt(&sample_transcript(), SummaryType::Comprehensive, None);
        assert!(prompt.starts_with("You are an expert video content analyst. \n"));
    }

    #[test]
    fn test_build_prompt_without_instructions() {
        let t = sample_transcript();
        let prompt = build_prompt(&t, SummaryType::QuickOverview, None);
        assert!(prompt.contains("**Additional User Instructions:** None"));
    }

    #[test]
    fn test_build_prompt_blank_instructions_treated_as_none() {
        let t = sample_transcript();
        let prompt = build_prompt(&t, SummaryType::Comprehensive, Some("   "));
        assert!(prompt.contains("**Additional User Instructions:** None"));
    }
}
