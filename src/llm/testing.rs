//! Mock model boundary for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::llm::{SpeechToText, TextGenerator};

/// Scripted text generator: returns queued responses in order and
/// counts calls so tests can assert which stages ran
pub struct MockGenerator {
    responses: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail_after: Option<usize>,
}

impl MockGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            fail_after: None,
        }
    }

    /// Fail with a transport-style error once `n` calls have succeeded
    pub fn failing_after(responses: Vec<String>, n: usize) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            fail_after: Some(n),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_after.is_some_and(|limit| n >= limit) {
            anyhow::bail!("simulated model invocation failure");
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            anyhow::bail!("mock has no response queued for call {}", n);
        }
        Ok(responses.remove(0))
    }
}

/// Canned speech-to-text: always returns the same transcript
pub struct MockTranscriber {
    pub transcript: String,
}

#[async_trait]
impl SpeechToText for MockTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>, _file_name: &str) -> Result<String> {
        Ok(self.transcript.clone())
    }
}
