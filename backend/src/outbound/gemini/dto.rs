//! DTOs for the Gemini `generateContent` wire format.
//!
//! The adapter encodes one user turn with a fixed generation config and
//! reads back the first text part of the first candidate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentRequestDto<'a> {
    pub(super) contents: Vec<ContentDto<'a>>,
    #[serde(rename = "generationConfig")]
    pub(super) generation_config: GenerationConfigDto,
}

#[derive(Debug, Serialize)]
pub(super) struct ContentDto<'a> {
    pub(super) parts: Vec<PartDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct PartDto<'a> {
    pub(super) text: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerationConfigDto {
    pub(super) temperature: f64,
    #[serde(rename = "topP")]
    pub(super) top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    pub(super) max_output_tokens: u32,
}

impl Default for GenerationConfigDto {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

impl<'a> GenerateContentRequestDto<'a> {
    /// Wrap the prompt text as a single-part user turn.
    pub(super) fn from_prompt_text(text: &'a str) -> Self {
        Self {
            contents: vec![ContentDto {
                parts: vec![PartDto { text }],
            }],
            generation_config: GenerationConfigDto::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentResponseDto {
    #[serde(default)]
    pub(super) candidates: Vec<CandidateDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateDto {
    pub(super) content: Option<CandidateContentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContentDto {
    #[serde(default)]
    pub(super) parts: Vec<ResponsePartDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePartDto {
    pub(super) text: Option<String>,
}

impl GenerateContentResponseDto {
    /// First text part of the first candidate, if any.
    pub(super) fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
