use anyhow::Result;
use tracing::{debug, info};

use crate::llm::{build_scoring_prompt, decode_or_fallback, TextGenerator, SCORING_SYSTEM_PROMPT};
use crate::models::{CallSummary, CallTranscript, QaScores};

/// Execute quality scoring: one model call producing all five 0-10
/// scores in a single structured response.
///
/// `overall` is taken as returned; no relationship to the other four
/// scores is enforced. Out-of-range values are clamped into [0, 10].
pub async fn run_quality_scoring(
    client: &impl TextGenerator,
    transcript: &CallTranscript,
    summary: &CallSummary,
) -> Result<QaScores> {
    let prompt = build_scoring_prompt(transcript, summary);
    let response = client.generate(SCORING_SYSTEM_PROMPT, &prompt).await?;
    debug!("Scoring response: {}", response);

    let scores: QaScores = decode_or_fallback(&response, QaScores::fallback);
    let scores = scores.clamped();
    info!(
        "QA scores: overall={:.1}, empathy={:.1}, professionalism={:.1}, resolution={:.1}, compliance={:.1}",
        scores.overall, scores.empathy, scores.professionalism, scores.resolution, scores.compliance
    );
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockGenerator;

    fn inputs() -> (CallTranscript, CallSummary) {
        (
            CallTranscript {
                text: "Agent: hello".to_string(),
                speaker_count: 2,
                duration: None,
            },
            CallSummary::fallback(),
        )
    }

    #[tokio::test]
    async fn test_well_formed_scores() {
        let mock = MockGenerator::new(vec![
            r#"{"empathy": 8.5, "professionalism": 9.0, "resolution": 7.5, "compliance": 8.0, "overall": 8.25}"#
                .to_string(),
        ]);
        let (transcript, summary) = inputs();
        let scores = run_quality_scoring(&mock, &transcript, &summary).await.unwrap();
        assert_eq!(scores.empathy, 8.5);
        assert_eq!(scores.overall, 8.25);
    }

    #[tokio::test]
    async fn test_undecodable_scores_take_uniform_fallback() {
        let mock = MockGenerator::new(vec!["8 out of 10 across the board".to_string()]);
        let (transcript, summary) = inputs();
        let scores = run_quality_scoring(&mock, &transcript, &summary).await.unwrap();
        assert_eq!(scores, QaScores::fallback());
    }

    #[tokio::test]
    async fn test_out_of_range_scores_are_clamped() {
        let mock = MockGenerator::new(vec![
            r#"{"empathy": 12.0, "professionalism": -3.0, "resolution": 5.0, "compliance": 10.0, "overall": 11.0}"#
                .to_string(),
        ]);
        let (transcript, summary) = inputs();
        let scores = run_quality_scoring(&mock, &transcript, &summary).await.unwrap();
        assert_eq!(scores.empathy, 10.0);
        assert_eq!(scores.professionalism, 0.0);
        assert_eq!(scores.overall, 10.0);
    }
}
