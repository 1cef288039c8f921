use crate::models::{CallSummary, CallTranscript, QaScores};

/// System prompt for intake validation
pub const INTAKE_SYSTEM_PROMPT: &str = "You are a call intake specialist. \
Validate if the input is a valid call transcript and extract basic metadata.";

/// Build the user prompt for intake validation
pub fn build_intake_prompt(raw_input: &str) -> String {
    format!(
        "Analyze this input and determine if it's a valid call center transcript:\n\n\
         {raw_input}\n\n\
         Respond with JSON containing: is_valid (boolean), reason (string), \
         estimated_speaker_count (int)"
    )
}

/// System prompt for summarization (states the exact output schema)
pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are an expert call summarizer. Analyze the call transcript and provide a structured summary.

Respond ONLY with valid JSON in this exact format:
{
    "key_points": ["point1", "point2", "point3"],
    "customer_issue": "brief description",
    "resolution": "how it was resolved",
    "sentiment": "positive" or "neutral" or "negative",
    "category": "complaint" or "inquiry" or "technical_support" or "billing" or "general",
    "action_items": ["action1", "action2"]
}"#;

/// Build the user prompt for summarization
pub fn build_summary_prompt(transcript: &CallTranscript) -> String {
    format!("Transcript:\n\n{}", transcript.text)
}

/// System prompt for quality scoring
pub const SCORING_SYSTEM_PROMPT: &str = r#"You are a call quality expert. Score this call on multiple dimensions (0-10 scale).

Respond ONLY with valid JSON in this exact format:
{
    "empathy": 7.5,
    "professionalism": 8.0,
    "resolution": 6.5,
    "compliance": 9.0,
    "overall": 7.75
}

Scoring guidelines:
- Empathy: Did the agent show understanding and care?
- Professionalism: Was communication clear and professional?
- Resolution: Was the issue effectively resolved?
- Compliance: Did the agent follow proper procedures?
- Overall: General quality of the interaction"#;

/// Build the user prompt for quality scoring
pub fn build_scoring_prompt(transcript: &CallTranscript, summary: &CallSummary) -> String {
    format!(
        "Transcript:\n{}\n\nSummary:\nIssue: {}\nResolution: {}\nSentiment: {}",
        transcript.text, summary.customer_issue, summary.resolution, summary.sentiment
    )
}

/// System prompt for routing and recommendations
pub const ROUTING_SYSTEM_PROMPT: &str = r#"You are a call routing and improvement specialist. Based on the call analysis, provide recommendations and tags.

Respond ONLY with valid JSON in this exact format:
{
    "recommendations": ["recommendation1", "recommendation2", "recommendation3"],
    "tags": ["tag1", "tag2", "tag3", "tag4"]
}

Recommendations should be specific, actionable improvements for the agent or process.
Tags should be useful for categorization and searching."#;

/// Build the user prompt for routing
pub fn build_routing_prompt(summary: &CallSummary, scores: &QaScores) -> String {
    format!(
        "Call Analysis:\n\
         Category: {}\n\
         Sentiment: {}\n\
         Issue: {}\n\
         Resolution: {}\n\
         Empathy Score: {}/10\n\
         Professionalism Score: {}/10\n\
         Resolution Score: {}/10\n\
         Compliance Score: {}/10",
        summary.category,
        summary.sentiment,
        summary.customer_issue,
        summary.resolution,
        scores.empathy,
        scores.professionalism,
        scores.resolution,
        scores.compliance
    )
}
