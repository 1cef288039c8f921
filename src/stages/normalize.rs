use tracing::debug;

use crate::models::{CallTranscript, IntakeResult};

/// Execute transcript normalization: reshape an approved intake result
/// into a `CallTranscript`.
///
/// Pure transform, no model call. Duration is unknown here and left
/// unset.
pub fn normalize_transcript(intake: &IntakeResult) -> CallTranscript {
    debug!(
        "Normalizing transcript: {} chars, {} speakers",
        intake.text.len(),
        intake.estimated_speaker_count
    );
    CallTranscript::from_intake(intake)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact_fields() {
        let intake = IntakeResult {
            is_valid: true,
            reason: "ok".to_string(),
            estimated_speaker_count: 2,
            text: "Agent: hello\nCustomer: hi".to_string(),
        };
        let transcript = normalize_transcript(&intake);
        assert_eq!(
            transcript,
            CallTranscript {
                text: "Agent: hello\nCustomer: hi".to_string(),
                speaker_count: 2,
                duration: None,
            }
        );
    }
}
