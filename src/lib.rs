pub mod audio;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod sample;
pub mod stages;

pub use audio::{is_supported_format, transcribe_file, TempAudio, SUPPORTED_FORMATS};
pub use config::{PipelineConfig, ScoreThresholds};
pub use error::PipelineError;
pub use llm::{OpenAiClient, OpenAiConfig, SpeechToText, TextGenerator};
pub use models::{
    CallAnalysis, CallCategory, CallSummary, CallTranscript, IntakeResult, QaScores,
    RoutingOutput, Sentiment,
};
pub use pipeline::Pipeline;
pub use report::{format_score, score_label, AnalysisReport, ScoreLabel};
pub use sample::SAMPLE_TRANSCRIPT;
