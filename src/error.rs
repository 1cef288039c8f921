use thiserror::Error;

/// Terminal error for a pipeline run.
///
/// Two tiers only: a business rejection from intake, or an unhandled
/// stage failure wrapped with the stage's name. Either way the run
/// yields no partial analysis.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Intake judged the input invalid; carries the rejection reason
    #[error("{0}")]
    Rejected(String),

    /// A stage failed with an unrecoverable error (model invocation,
    /// network, malformed transport response)
    #[error("{stage}: {message}")]
    Stage {
        stage: &'static str,
        message: String,
    },
}

impl PipelineError {
    pub(crate) fn stage(stage: &'static str, err: anyhow::Error) -> Self {
        Self::Stage {
            stage,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_display() {
        let err = PipelineError::stage("summarization", anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "summarization: connection refused");
    }

    #[test]
    fn test_rejection_display_is_bare_reason() {
        let err = PipelineError::Rejected("Not a call transcript".to_string());
        assert_eq!(err.to_string(), "Not a call transcript");
    }
}
