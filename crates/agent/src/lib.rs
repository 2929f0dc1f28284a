//! Command interpreter - rule-based intent routing and catalog handlers
//!
//! This crate is the "brain" of the shelfy system - the runtime that:
//! - Tags transcript words with parts of speech (`tagger`)
//! - Extracts counts, prices, categories and item words (`extract`)
//! - Routes each command to a role-scoped intent (`router`)
//! - Applies the intent to the catalog and renders a spoken reply (`handlers`, `reply`)
//!
//! # Architecture
//!
//! Dispatch is one synchronous pass:
//! 1. **Routing** (`router`) - First matching phrase for the speaker's role wins
//! 2. **Extraction** (`extract`) - Pull the numbers and item words the intent needs
//! 3. **Handling** (`handlers`) - Mutate the catalog, produce a `Reply`
//! 4. **Persistence** (`runtime`) - Save a snapshot whenever the reply mutated state
//!
//! # Key Types
//!
//! - `AgentRuntime` - Main orchestrator (see `runtime` module)
//! - `Tagger` - Pluggable part-of-speech seam, `LexiconTagger` is the default
//! - `Reply` - Every user-visible sentence, including usage guidance
//!
//! # Design Principle
//!
//! Misunderstood commands are never errors. Anything a speaker can get wrong
//! comes back as a `Reply` with guidance; `Err` is reserved for persistence.

pub mod extract;
pub mod handlers;
pub mod reply;
pub mod router;
pub mod runtime;
pub mod tagger;

pub use reply::{MatchHit, Reply, UsageHint};
pub use router::{Intent, Role};
pub use runtime::{AgentRuntime, DispatchError};
pub use tagger::{LexiconTagger, PartOfSpeech, TaggedWord, Tagger, TaggerError};
