use serde::{Deserialize, Serialize};

/// Overall sentiment of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category assigned to a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallCategory {
    Complaint,
    Inquiry,
    TechnicalSupport,
    Billing,
    General,
}

impl CallCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallCategory::Complaint => "complaint",
            CallCategory::Inquiry => "inquiry",
            CallCategory::TechnicalSupport => "technical_support",
            CallCategory::Billing => "billing",
            CallCategory::General => "general",
        }
    }
}

impl std::fmt::Display for CallCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured summary of a call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallSummary {
    /// Main points from the call, in order
    #[serde(default = "default_key_points")]
    pub key_points: Vec<String>,
    /// Primary customer issue or request
    #[serde(default = "default_unidentified")]
    pub customer_issue: String,
    /// How the issue was resolved
    #[serde(default = "default_unspecified")]
    pub resolution: String,
    /// Overall sentiment of the call
    #[serde(default = "default_sentiment")]
    pub sentiment: Sentiment,
    /// Category of the call
    #[serde(default = "default_category")]
    pub category: CallCategory,
    /// Follow-up actions needed
    #[serde(default)]
    pub action_items: Vec<String>,
}

// Per-field defaults so a partially-complete response still decodes;
// a type or enum mismatch fails the whole decode and takes the full
// fallback record instead.
fn default_key_points() -> Vec<String> {
    vec!["No key points extracted".to_string()]
}

fn default_unidentified() -> String {
    "Not identified".to_string()
}

fn default_unspecified() -> String {
    "Not specified".to_string()
}

fn default_sentiment() -> Sentiment {
    Sentiment::Neutral
}

fn default_category() -> CallCategory {
    CallCategory::General
}

impl CallSummary {
    /// Fallback used when the summarization response cannot be decoded
    pub fn fallback() -> Self {
        Self {
            key_points: vec!["Summary generation failed - using fallback".to_string()],
            customer_issue: "Unable to parse".to_string(),
            resolution: "Unable to parse".to_string(),
            sentiment: Sentiment::Neutral,
            category: CallCategory::General,
            action_items: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_string(&CallCategory::TechnicalSupport).unwrap(),
            "\"technical_support\""
        );
        assert_eq!(
            serde_json::from_str::<Sentiment>("\"negative\"").unwrap(),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let summary: CallSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.key_points, vec!["No key points extracted"]);
        assert_eq!(summary.customer_issue, "Not identified");
        assert_eq!(summary.resolution, "Not specified");
        assert_eq!(summary.sentiment, Sentiment::Neutral);
        assert_eq!(summary.category, CallCategory::General);
        assert!(summary.action_items.is_empty());
    }

    #[test]
    fn test_unknown_enum_value_fails_decode() {
        let result = serde_json::from_str::<CallSummary>(r#"{"sentiment": "ecstatic"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(CallSummary::fallback(), CallSummary::fallback());
    }
}
