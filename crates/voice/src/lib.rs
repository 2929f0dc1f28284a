//! Speech seams for the shelfy session shell.
//!
//! Real speech-to-text and text-to-speech engines live behind the
//! `Transcriber` and `SpeechSynthesizer` traits. The implementations here
//! are the ones every deployment needs anyway: scripted input for tests and
//! demos, line input for typed sessions, and a synthesizer that produces
//! silence.

pub mod synthesize;
pub mod transcribe;

pub use synthesize::{AudioClip, NullSynthesizer, SpeechSynthesizer, SynthesisError};
pub use transcribe::{LineTranscriber, ScriptedTranscriber, Transcriber, TranscribeError};
