use serde::{Deserialize, Serialize};

/// Quality assurance scores for a call, each on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QaScores {
    #[serde(default = "default_score")]
    pub empathy: f64,
    #[serde(default = "default_score")]
    pub professionalism: f64,
    #[serde(default = "default_score")]
    pub resolution: f64,
    #[serde(default = "default_score")]
    pub compliance: f64,
    #[serde(default = "default_score")]
    pub overall: f64,
}

fn default_score() -> f64 {
    7.0
}

impl QaScores {
    /// Fallback used when the scoring response cannot be decoded:
    /// 7.0 uniformly across all five fields
    pub fn fallback() -> Self {
        Self {
            empathy: 7.0,
            professionalism: 7.0,
            resolution: 7.0,
            compliance: 7.0,
            overall: 7.0,
        }
    }

    /// Clamp every field into the [0, 10] interval.
    ///
    /// The model is asked for 0-10 values but nothing enforces that on
    /// the wire; out-of-range output is clamped rather than rejected.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| v.clamp(0.0, 10.0);
        Self {
            empathy: clamp(self.empathy),
            professionalism: clamp(self.professionalism),
            resolution: clamp(self.resolution),
            compliance: clamp(self.compliance),
            overall: clamp(self.overall),
        }
    }

    /// Mean of the four sub-scores. Display helper only; `overall`
    /// remains whatever the model returned.
    pub fn average_score(&self) -> f64 {
        (self.empathy + self.professionalism + self.resolution + self.compliance) / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_uniform() {
        let scores = QaScores::fallback();
        assert_eq!(scores.empathy, 7.0);
        assert_eq!(scores.professionalism, 7.0);
        assert_eq!(scores.resolution, 7.0);
        assert_eq!(scores.compliance, 7.0);
        assert_eq!(scores.overall, 7.0);
    }

    #[test]
    fn test_clamped() {
        let scores = QaScores {
            empathy: -1.5,
            professionalism: 11.0,
            resolution: 5.0,
            compliance: 10.0,
            overall: 100.0,
        }
        .clamped();
        assert_eq!(scores.empathy, 0.0);
        assert_eq!(scores.professionalism, 10.0);
        assert_eq!(scores.resolution, 5.0);
        assert_eq!(scores.compliance, 10.0);
        assert_eq!(scores.overall, 10.0);
    }

    #[test]
    fn test_average_score_ignores_overall() {
        let scores = QaScores {
            empathy: 8.0,
            professionalism: 6.0,
            resolution: 7.0,
            compliance: 9.0,
            overall: 1.0,
        };
        assert_eq!(scores.average_score(), 7.5);
    }

    #[test]
    fn test_missing_fields_default_to_seven() {
        let scores: QaScores = serde_json::from_str(r#"{"empathy": 9.5}"#).unwrap();
        assert_eq!(scores.empathy, 9.5);
        assert_eq!(scores.overall, 7.0);
    }
}
