use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::ScoreThresholds;
use crate::models::{CallAnalysis, CallCategory, QaScores, Sentiment};

/// Flat export document for a completed analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,
    pub qa_scores: ReportScores,
    pub recommendations: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub category: CallCategory,
    pub sentiment: Sentiment,
    pub customer_issue: String,
    pub resolution: String,
    pub key_points: Vec<String>,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportScores {
    pub overall: f64,
    pub empathy: f64,
    pub professionalism: f64,
    pub resolution: f64,
    pub compliance: f64,
}

impl AnalysisReport {
    pub fn from_analysis(analysis: &CallAnalysis) -> Self {
        Self {
            summary: ReportSummary {
                category: analysis.summary.category,
                sentiment: analysis.summary.sentiment,
                customer_issue: analysis.summary.customer_issue.clone(),
                resolution: analysis.summary.resolution.clone(),
                key_points: analysis.summary.key_points.clone(),
                action_items: analysis.summary.action_items.clone(),
            },
            qa_scores: ReportScores {
                overall: analysis.qa_scores.overall,
                empathy: analysis.qa_scores.empathy,
                professionalism: analysis.qa_scores.professionalism,
                resolution: analysis.qa_scores.resolution,
                compliance: analysis.qa_scores.compliance,
            },
            recommendations: analysis.recommendations.clone(),
            tags: analysis.tags.clone(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Display label for a 0-10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "Excellent",
            ScoreLabel::Good => "Good",
            ScoreLabel::NeedsImprovement => "Needs Improvement",
            ScoreLabel::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score against the configured thresholds
pub fn score_label(score: f64, thresholds: &ScoreThresholds) -> ScoreLabel {
    if score >= thresholds.excellent {
        ScoreLabel::Excellent
    } else if score >= thresholds.good {
        ScoreLabel::Good
    } else if score >= thresholds.needs_improvement {
        ScoreLabel::NeedsImprovement
    } else {
        ScoreLabel::Poor
    }
}

/// Format a score for display, e.g. "8.2/10"
pub fn format_score(score: f64) -> String {
    format!("{:.1}/10", score)
}

/// Render a plain-text score report with labels
pub fn format_score_report(scores: &QaScores, thresholds: &ScoreThresholds) -> String {
    let line = |name: &str, value: f64| {
        format!(
            "  {:<16} {:>7}  ({})\n",
            name,
            format_score(value),
            score_label(value, thresholds)
        )
    };

    let mut out = String::from("QA Scores\n---------\n");
    out.push_str(&line("Overall", scores.overall));
    out.push_str(&line("Empathy", scores.empathy));
    out.push_str(&line("Professionalism", scores.professionalism));
    out.push_str(&line("Resolution", scores.resolution));
    out.push_str(&line("Compliance", scores.compliance));
    out
}
