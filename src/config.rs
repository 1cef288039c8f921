/// Thresholds for classifying a 0-10 score into a display label.
///
/// Display only: pipeline logic never branches on these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreThresholds {
    /// Scores at or above this are "Excellent"
    pub excellent: f64,
    /// Scores at or above this are "Good"
    pub good: f64,
    /// Scores at or above this are "Needs Improvement"; below is "Poor"
    pub needs_improvement: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            excellent: 8.0,
            good: 6.0,
            needs_improvement: 4.0,
        }
    }
}

/// Configuration for a pipeline run, passed explicitly into the
/// orchestrator at construction time
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Chat model identifier
    pub model: String,
    /// Sampling temperature for chat completions
    pub temperature: f64,
    /// Speech-to-text model identifier for audio input
    pub transcription_model: String,
    /// Display-label thresholds for QA scores
    pub thresholds: ScoreThresholds,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            transcription_model: "whisper-1".to_string(),
            thresholds: ScoreThresholds::default(),
        }
    }
}
