use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::info;

use crate::llm::SpeechToText;

/// Audio container formats accepted for transcription
pub const SUPPORTED_FORMATS: &[&str] = &["mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm"];

/// Check whether a file's extension is on the transcription allow-list
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_FORMATS.contains(&e.as_str()))
}

/// Uploaded audio staged in a temporary file.
///
/// The file is removed when this value is dropped, on every exit path.
#[derive(Debug)]
pub struct TempAudio {
    file: NamedTempFile,
    file_name: String,
}

impl TempAudio {
    /// Stage uploaded bytes, preserving the original file's extension
    /// so the transcription service can detect the container format
    pub fn stage(original_name: &str, bytes: &[u8]) -> Result<Self> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        anyhow::ensure!(
            is_supported_format(Path::new(original_name)),
            "Unsupported audio format: {:?} (supported: {})",
            extension,
            SUPPORTED_FORMATS.join(", ")
        );

        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .context("Failed to create temporary audio file")?;
        file.write_all(bytes)
            .context("Failed to write temporary audio file")?;

        Ok(Self {
            file,
            file_name: original_name.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Transcribe an audio file into plain transcript text.
///
/// The format check runs before any bytes are read or sent.
pub async fn transcribe_file(stt: &impl SpeechToText, path: &Path) -> Result<String> {
    anyhow::ensure!(
        is_supported_format(path),
        "Unsupported audio format: {:?} (supported: {})",
        path.extension().unwrap_or_default(),
        SUPPORTED_FORMATS.join(", ")
    );

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read audio file: {:?}", path))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio.mp3")
        .to_string();

    info!("Transcribing {} ({} bytes)", file_name, bytes.len());
    let text = stt
        .transcribe(bytes, &file_name)
        .await
        .context("Audio transcription failed")?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockTranscriber;

    #[test]
    fn test_supported_formats() {
        assert!(is_supported_format(Path::new("call.mp3")));
        assert!(is_supported_format(Path::new("call.WAV")));
        assert!(is_supported_format(Path::new("meeting.m4a")));
        assert!(!is_supported_format(Path::new("call.flac")));
        assert!(!is_supported_format(Path::new("call.ogg")));
        assert!(!is_supported_format(Path::new("no_extension")));
    }

    #[test]
    fn test_temp_audio_removed_on_drop() {
        let staged = TempAudio::stage("call.mp3", b"fake audio bytes").unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"fake audio bytes");
        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn test_stage_rejects_unsupported_format() {
        let err = TempAudio::stage("call.flac", b"bytes").unwrap_err();
        assert!(err.to_string().contains("Unsupported audio format"));
    }

    #[tokio::test]
    async fn test_transcribe_file_round_trip() {
        let staged = TempAudio::stage("call.wav", b"RIFF....").unwrap();
        let stt = MockTranscriber {
            transcript: "Agent: hello".to_string(),
        };
        let text = transcribe_file(&stt, staged.path()).await.unwrap();
        assert_eq!(text, "Agent: hello");
    }

    #[tokio::test]
    async fn test_transcribe_file_rejects_unsupported_format() {
        let stt = MockTranscriber {
            transcript: String::new(),
        };
        let err = transcribe_file(&stt, Path::new("call.ogg")).await.unwrap_err();
        assert!(err.to_string().contains("Unsupported audio format"));
    }
}
