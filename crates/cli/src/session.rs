use shelfy_agent::runtime::{AgentRuntime, DispatchError};
use shelfy_agent::router::Role;
use shelfy_agent::tagger::Tagger;
use shelfy_core::snapshot::SnapshotStore;
use shelfy_core::Catalog;
use shelfy_voice::{AudioClip, SpeechSynthesizer, TranscribeError, Transcriber};
use uuid::Uuid;

/// What one session step produced. Everything except `Ended` leaves the
/// session ready for the next step.
#[derive(Debug)]
pub enum SessionTurn {
    /// A command went through the interpreter.
    Reply { transcript: String, reply_text: String, clip: AudioClip },
    /// A control line switched the speaker role.
    RoleChanged(Role),
    /// Hearing failed; the apology is spoken and the session continues.
    Apology(String),
    /// The input source is exhausted or the speaker left.
    Ended,
}

/// One conversation: a transcriber feeding the interpreter, replies going
/// back out through a synthesizer. Commands run strictly one at a time.
///
/// Control lines start with `/`: `/role seller|buyer` switches the speaker,
/// `/quit` ends the session. Everything else is treated as a command.
pub struct Session<S, T> {
    runtime: AgentRuntime<S, T>,
    catalog: Catalog,
    role: Role,
    transcriber: Box<dyn Transcriber>,
    synthesizer: Box<dyn SpeechSynthesizer>,
    turns: usize,
}

impl<S, T> Session<S, T>
where
    S: SnapshotStore,
    T: Tagger,
{
    pub fn new(
        runtime: AgentRuntime<S, T>,
        catalog: Catalog,
        role: Role,
        transcriber: Box<dyn Transcriber>,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        Self { runtime, catalog, role, transcriber, synthesizer, turns: 0 }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Command turns completed so far; control lines and apologies do not
    /// count.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// One transcribe-dispatch-synthesize cycle. `Err` only on persistence
    /// failure, which ends the session for the caller.
    pub fn step(&mut self) -> Result<SessionTurn, DispatchError> {
        let transcript = match self.transcriber.transcribe() {
            Ok(transcript) => transcript,
            Err(TranscribeError::Closed) => return Ok(SessionTurn::Ended),
            Err(error) => {
                tracing::warn!(
                    event_name = "session.capture.failed",
                    role = self.role.as_str(),
                    error = %error,
                    "capture failed"
                );
                return Ok(SessionTurn::Apology(error.apology()));
            }
        };

        if let Some(turn) = self.control_turn(&transcript) {
            return Ok(turn);
        }

        let interaction_id = Uuid::new_v4();
        tracing::info!(
            event_name = "session.command.received",
            role = self.role.as_str(),
            interaction_id = %interaction_id,
            "transcript accepted"
        );

        let reply = self.runtime.dispatch(self.role, &transcript, &mut self.catalog)?;
        let reply_text = reply.render();

        let clip = match self.synthesizer.synthesize(&reply_text) {
            Ok(clip) => clip,
            Err(error) => {
                tracing::warn!(
                    event_name = "session.synthesis.failed",
                    interaction_id = %interaction_id,
                    error = %error,
                    "synthesis failed, replying silently"
                );
                AudioClip::empty()
            }
        };

        self.turns += 1;
        tracing::info!(
            event_name = "session.command.replied",
            role = self.role.as_str(),
            interaction_id = %interaction_id,
            mutated = reply.mutates(),
            "reply rendered"
        );

        Ok(SessionTurn::Reply { transcript, reply_text, clip })
    }

    fn control_turn(&mut self, transcript: &str) -> Option<SessionTurn> {
        let trimmed = transcript.trim();

        if trimmed == "/quit" || trimmed == "/exit" {
            return Some(SessionTurn::Ended);
        }

        if let Some(rest) = trimmed.strip_prefix("/role") {
            return Some(match rest.trim().parse::<Role>() {
                Ok(role) => {
                    self.role = role;
                    tracing::info!(
                        event_name = "session.role.changed",
                        role = role.as_str(),
                        "role switched"
                    );
                    SessionTurn::RoleChanged(role)
                }
                Err(error) => SessionTurn::Apology(format!("{error}")),
            });
        }

        None
    }
}
