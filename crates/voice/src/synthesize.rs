use thiserror::Error;

/// Rendered speech for one reply. The payload stays opaque to the session;
/// players and UIs decide what to do with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl AudioClip {
    /// A silent clip. Sessions fall back to this when synthesis fails.
    pub fn empty() -> Self {
        Self { media_type: "audio/mpeg".to_string(), data: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("synthesis backend failed: {0}")]
    Backend(String),
}

/// Text-to-speech seam. Every rendered reply is offered here; the session
/// never depends on the result beyond handing it to the caller.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str) -> Result<AudioClip, SynthesisError>;
}

/// Produces silence. The typed session shell uses this since the reply is
/// already printed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn synthesize(&self, _text: &str) -> Result<AudioClip, SynthesisError> {
        Ok(AudioClip::empty())
    }
}
