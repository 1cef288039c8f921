use serde::{Deserialize, Serialize};

/// Result of the intake validation stage
///
/// Produced exactly once per pipeline run and never mutated afterward.
/// Consumed by transcript normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeResult {
    /// Whether the input was judged to be a usable call transcript
    pub is_valid: bool,
    /// Human-readable verdict (acceptance note or rejection reason)
    pub reason: String,
    /// Estimated number of distinct speakers (at least 1)
    pub estimated_speaker_count: u32,
    /// The raw input text, carried forward unmodified
    pub text: String,
}

impl IntakeResult {
    /// Fallback used when the validation response cannot be decoded.
    ///
    /// Fail-open: an unparseable verdict accepts the input with the
    /// default speaker estimate.
    pub fn accepted_fallback(text: &str) -> Self {
        Self {
            is_valid: true,
            reason: "Transcript accepted".to_string(),
            estimated_speaker_count: 2,
            text: text.to_string(),
        }
    }

    /// Deterministic rejection for empty input, issued before any model call.
    pub fn rejected_empty() -> Self {
        Self {
            is_valid: false,
            reason: "Input is empty".to_string(),
            estimated_speaker_count: 1,
            text: String::new(),
        }
    }
}
