use anyhow::Result;
use tracing::{debug, info};

use crate::llm::{build_summary_prompt, decode_or_fallback, TextGenerator, SUMMARY_SYSTEM_PROMPT};
use crate::models::{CallSummary, CallTranscript};

/// Execute summarization: one model call producing the structured
/// six-field summary. Sentiment and category tie-breaks are left to
/// the model's judgment.
pub async fn run_summarization(
    client: &impl TextGenerator,
    transcript: &CallTranscript,
) -> Result<CallSummary> {
    let prompt = build_summary_prompt(transcript);
    let response = client.generate(SUMMARY_SYSTEM_PROMPT, &prompt).await?;
    debug!("Summary response: {}", response);

    let summary: CallSummary = decode_or_fallback(&response, CallSummary::fallback);
    info!(
        "Summary: category={}, sentiment={}, {} key points",
        summary.category,
        summary.sentiment,
        summary.key_points.len()
    );
    Ok(summary)
}
