use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::llm::TextGenerator;
use crate::models::CallAnalysis;
use crate::stages::{
    normalize_transcript, run_intake, run_quality_scoring, run_routing, run_summarization,
};

/// The five-stage analysis pipeline.
///
/// Strictly sequential: intake -> normalize -> summarize -> score ->
/// route, with one conditional exit after intake. Each run constructs
/// fresh state; nothing is shared between invocations, and a failed
/// run discards whatever had accumulated.
pub struct Pipeline<G: TextGenerator> {
    client: G,
    config: PipelineConfig,
}

impl<G: TextGenerator> Pipeline<G> {
    pub fn new(client: G, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full pipeline over raw transcript text.
    ///
    /// Returns the complete analysis, or an error if intake rejects
    /// the input or any stage fails irrecoverably. Never a partial
    /// result.
    pub async fn run(&self, raw_input: &str) -> Result<CallAnalysis, PipelineError> {
        info!("Intake: validating input ({} chars)", raw_input.len());
        let intake = run_intake(&self.client, raw_input)
            .await
            .map_err(|e| PipelineError::stage("intake", e))?;

        if !intake.is_valid {
            info!("Intake rejected input: {}", intake.reason);
            return Err(PipelineError::Rejected(intake.reason));
        }

        info!(
            "Intake accepted: {} (est. {} speakers)",
            intake.reason, intake.estimated_speaker_count
        );
        let transcript = normalize_transcript(&intake);

        info!("Summarization: generating structured summary");
        let summary = run_summarization(&self.client, &transcript)
            .await
            .map_err(|e| PipelineError::stage("summarization", e))?;

        info!("Quality scoring: evaluating call");
        let qa_scores = run_quality_scoring(&self.client, &transcript, &summary)
            .await
            .map_err(|e| PipelineError::stage("quality_scoring", e))?;

        info!("Routing: generating recommendations and tags");
        let routing = run_routing(&self.client, &summary, &qa_scores)
            .await
            .map_err(|e| PipelineError::stage("routing", e))?;

        Ok(CallAnalysis {
            transcript,
            summary,
            qa_scores,
            recommendations: routing.recommendations,
            tags: routing.tags,
        })
    }
}
