use std::collections::VecDeque;
use std::io::BufRead;

use thiserror::Error;

/// Speech-to-text seam. Implementations hand back one lowercased utterance
/// per call; the interpreter downstream assumes that casing.
pub trait Transcriber {
    fn transcribe(&mut self) -> Result<String, TranscribeError>;
}

#[derive(Debug, Error)]
pub enum TranscribeError {
    /// The capture worked but nothing intelligible was in it.
    #[error("nothing intelligible in the capture")]
    NothingRecognized,
    /// The recognition backend could not be reached.
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    /// The input source is exhausted; the session should end, not apologize.
    #[error("capture source closed")]
    Closed,
    #[error("capture failed: {0}")]
    Capture(String),
}

impl TranscribeError {
    /// The sentence spoken back when hearing failed. `Closed` never reaches
    /// the speaker; sessions end on it before apologizing.
    pub fn apology(&self) -> String {
        match self {
            Self::NothingRecognized => "Sorry, I didn't catch that.".to_string(),
            Self::ServiceUnavailable(_) => {
                "Error: Speech recognition service unavailable.".to_string()
            }
            Self::Closed => "Error: capture source closed.".to_string(),
            Self::Capture(detail) => format!("Error: {detail}"),
        }
    }
}

/// Replays queued utterances, then reports the source as closed. Tests and
/// demo transcripts run on this.
#[derive(Debug, Default)]
pub struct ScriptedTranscriber {
    utterances: VecDeque<String>,
}

impl ScriptedTranscriber {
    pub fn new(utterances: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { utterances: utterances.into_iter().map(Into::into).collect() }
    }

    pub fn remaining(&self) -> usize {
        self.utterances.len()
    }
}

impl Transcriber for ScriptedTranscriber {
    fn transcribe(&mut self) -> Result<String, TranscribeError> {
        self.utterances
            .pop_front()
            .map(|utterance| utterance.to_lowercase())
            .ok_or(TranscribeError::Closed)
    }
}

/// Treats typed lines as utterances, with the same lowercase contract a real
/// recognition backend would honor. Blank lines count as unheard captures.
pub struct LineTranscriber<R> {
    input: R,
}

impl<R: BufRead> LineTranscriber<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Transcriber for LineTranscriber<R> {
    fn transcribe(&mut self) -> Result<String, TranscribeError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|error| TranscribeError::Capture(error.to_string()))?;

        if read == 0 {
            return Err(TranscribeError::Closed);
        }

        let utterance = line.trim().to_lowercase();
        if utterance.is_empty() {
            return Err(TranscribeError::NothingRecognized);
        }

        Ok(utterance)
    }
}
