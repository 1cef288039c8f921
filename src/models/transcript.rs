use serde::{Deserialize, Serialize};

use crate::models::IntakeResult;

/// A normalized call transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallTranscript {
    /// Full transcript text
    pub text: String,
    /// Number of speakers on the call
    pub speaker_count: u32,
    /// Call duration, if known (e.g., "12:34")
    #[serde(default)]
    pub duration: Option<String>,
}

impl CallTranscript {
    /// Derive a transcript from an approved intake result.
    ///
    /// Pure reshape, no model call. Duration is unknown at this point
    /// and left unset.
    pub fn from_intake(intake: &IntakeResult) -> Self {
        Self {
            text: intake.text.clone(),
            speaker_count: intake.estimated_speaker_count,
            duration: None,
        }
    }
}
