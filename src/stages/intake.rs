use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::llm::{build_intake_prompt, decode_or_fallback, TextGenerator, INTAKE_SYSTEM_PROMPT};
use crate::models::IntakeResult;

/// Wire schema for the intake verdict. Missing fields take the same
/// defaults as a full parse failure.
#[derive(Debug, Deserialize)]
struct IntakeVerdict {
    #[serde(default = "default_valid")]
    is_valid: bool,
    #[serde(default = "default_reason")]
    reason: String,
    #[serde(default = "default_speakers")]
    estimated_speaker_count: u32,
}

fn default_valid() -> bool {
    true
}

fn default_reason() -> String {
    "Valid transcript".to_string()
}

fn default_speakers() -> u32 {
    2
}

/// Execute intake validation: judge whether the input is a usable call
/// transcript and estimate the speaker count.
///
/// This is the pipeline's single decision point. Empty input is
/// rejected deterministically without a model call. An undecodable
/// model verdict accepts the input (fail-open).
pub async fn run_intake(client: &impl TextGenerator, raw_input: &str) -> Result<IntakeResult> {
    if raw_input.trim().is_empty() {
        info!("Intake: rejecting empty input");
        return Ok(IntakeResult::rejected_empty());
    }

    let prompt = build_intake_prompt(raw_input);
    let response = client.generate(INTAKE_SYSTEM_PROMPT, &prompt).await?;
    debug!("Intake response: {}", response);

    let fallback = IntakeResult::accepted_fallback(raw_input);
    let verdict: IntakeVerdict = decode_or_fallback(&response, || IntakeVerdict {
        is_valid: fallback.is_valid,
        reason: fallback.reason.clone(),
        estimated_speaker_count: fallback.estimated_speaker_count,
    });

    Ok(IntakeResult {
        is_valid: verdict.is_valid,
        reason: verdict.reason,
        // The schema promises at least one speaker
        estimated_speaker_count: verdict.estimated_speaker_count.max(1),
        text: raw_input.to_string(),
    })
}
