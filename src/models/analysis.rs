use serde::{Deserialize, Serialize};

use crate::models::{CallSummary, CallTranscript, QaScores};

/// Recommendations and tags produced by the routing stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingOutput {
    /// Actionable improvements for the agent or process, in order
    pub recommendations: Vec<String>,
    /// Tags for categorization and search, in order
    pub tags: Vec<String>,
}

impl RoutingOutput {
    /// Fallback used when the routing response cannot be decoded.
    ///
    /// Tags carry forward the summary's category and sentiment so the
    /// call stays searchable even on a degraded run.
    pub fn fallback(summary: &CallSummary) -> Self {
        Self {
            recommendations: vec![
                "Review call quality".to_string(),
                "Follow up with customer".to_string(),
            ],
            tags: vec![
                summary.category.as_str().to_string(),
                summary.sentiment.as_str().to_string(),
                "needs_review".to_string(),
            ],
        }
    }
}

/// Complete analysis of a call: the terminal pipeline artifact.
///
/// Constructed only when every stage has completed; a failed run yields
/// a `PipelineError` instead, never a partial analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallAnalysis {
    pub transcript: CallTranscript,
    pub summary: CallSummary,
    pub qa_scores: QaScores,
    pub recommendations: Vec<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CallCategory, Sentiment};

    #[test]
    fn test_routing_fallback_carries_summary_labels() {
        let mut summary = CallSummary::fallback();
        summary.category = CallCategory::Billing;
        summary.sentiment = Sentiment::Negative;

        let routing = RoutingOutput::fallback(&summary);
        assert_eq!(
            routing.recommendations,
            vec!["Review call quality", "Follow up with customer"]
        );
        assert_eq!(routing.tags, vec!["billing", "negative", "needs_review"]);
    }
}
