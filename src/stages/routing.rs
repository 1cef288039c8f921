use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::llm::{build_routing_prompt, decode_or_fallback, TextGenerator, ROUTING_SYSTEM_PROMPT};
use crate::models::{CallSummary, QaScores, RoutingOutput};

#[derive(Debug, Deserialize)]
struct RoutingResponse {
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Execute routing: one model call producing free-text recommendations
/// and search tags from the accumulated analysis.
pub async fn run_routing(
    client: &impl TextGenerator,
    summary: &CallSummary,
    scores: &QaScores,
) -> Result<RoutingOutput> {
    let prompt = build_routing_prompt(summary, scores);
    let response = client.generate(ROUTING_SYSTEM_PROMPT, &prompt).await?;
    debug!("Routing response: {}", response);

    let fallback = RoutingOutput::fallback(summary);
    let decoded: RoutingResponse = decode_or_fallback(&response, || RoutingResponse {
        recommendations: fallback.recommendations.clone(),
        tags: fallback.tags.clone(),
    });

    // A decoded-but-empty list degrades the same way a parse failure does
    let output = RoutingOutput {
        recommendations: if decoded.recommendations.is_empty() {
            fallback.recommendations
        } else {
            decoded.recommendations
        },
        tags: if decoded.tags.is_empty() {
            fallback.tags
        } else {
            decoded.tags
        },
    };

    info!(
        "Routing: {} recommendations, {} tags",
        output.recommendations.len(),
        output.tags.len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockGenerator;
    use crate::models::{CallCategory, Sentiment};

    fn inputs() -> (CallSummary, QaScores) {
        let mut summary = CallSummary::fallback();
        summary.category = CallCategory::TechnicalSupport;
        summary.sentiment = Sentiment::Positive;
        (summary, QaScores::fallback())
    }

    #[tokio::test]
    async fn test_well_formed_routing() {
        let mock = MockGenerator::new(vec![r#"{
            "recommendations": ["Offer proactive firmware updates"],
            "tags": ["modem", "connectivity", "resolved"]
        }"#
        .to_string()]);
        let (summary, scores) = inputs();
        let output = run_routing(&mock, &summary, &scores).await.unwrap();
        assert_eq!(output.recommendations, vec!["Offer proactive firmware updates"]);
        assert_eq!(output.tags, vec!["modem", "connectivity", "resolved"]);
    }

    #[tokio::test]
    async fn test_undecodable_routing_takes_fallback() {
        let mock = MockGenerator::new(vec!["route to tier two".to_string()]);
        let (summary, scores) = inputs();
        let output = run_routing(&mock, &summary, &scores).await.unwrap();
        assert_eq!(output, RoutingOutput::fallback(&summary));
    }

    #[tokio::test]
    async fn test_empty_lists_degrade_to_fallback() {
        let mock =
            MockGenerator::new(vec![r#"{"recommendations": [], "tags": []}"#.to_string()]);
        let (summary, scores) = inputs();
        let output = run_routing(&mock, &summary, &scores).await.unwrap();
        assert_eq!(output, RoutingOutput::fallback(&summary));
        assert!(output.tags.contains(&"needs_review".to_string()));
    }
}
