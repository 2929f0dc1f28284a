use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shelfy_core::config::TaggerConfig;
use thiserror::Error;

/// Grammatical class assigned to one word of a transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Number,
}

impl PartOfSpeech {
    /// Item words are exactly the nouns and proper nouns of a command.
    pub fn is_noun_like(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// One word of a command with its class. `text` keeps the speaker's casing;
/// edge punctuation is already trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedWord {
    pub text: String,
    pub part: PartOfSpeech,
}

/// Part-of-speech seam. The interpreter only ever talks to this trait, so a
/// different tagging backend is a construction-time swap.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord>;
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("could not read lexicon file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse lexicon file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("lexicon file `{0}` defines no words")]
    EmptyLexicon(PathBuf),
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "all", "every", "each",
    "no", "another", "both", "either", "neither", "many", "few", "much", "several",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "it", "its", "we", "us", "our", "ours", "they", "them", "their", "theirs", "myself",
    "yourself", "something", "anything", "everything", "nothing", "someone", "anyone", "everyone",
];

const PREPOSITIONS: &[&str] = &[
    "to", "for", "of", "in", "on", "at", "with", "from", "by", "per", "under", "over", "about",
    "into", "onto", "up", "down", "off", "out", "near", "between", "within", "without", "before",
    "after", "during",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "because", "while", "when",
    "where", "unless", "until", "although",
];

const VERBS: &[&str] = &[
    "add", "adds", "added", "remove", "removes", "removed", "delete", "deletes", "deleted",
    "assign", "assigns", "assigned", "change", "changes", "changed", "set", "sets", "update",
    "updates", "updated", "place", "places", "placed", "order", "orders", "ordered", "buy",
    "buys", "bought", "sell", "sells", "sold", "search", "searches", "searched", "find", "finds",
    "found", "look", "looks", "looked", "looking", "show", "shows", "showed", "list", "lists",
    "listed", "give", "gives", "gave", "get", "gets", "got", "want", "wants", "wanted", "need",
    "needs", "needed", "make", "makes", "made", "put", "puts", "say", "says", "said", "tell",
    "tells", "told", "check", "checks", "checked", "see", "sees", "saw", "seen", "know", "knows",
    "knew", "have", "has", "had", "do", "does", "did", "done", "is", "are", "was", "were", "be",
    "been", "being", "am", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "let", "lets", "bring", "brings", "brought", "take", "takes", "took", "taken",
    "keep", "keeps", "kept", "send", "sends", "sent",
];

const ADJECTIVES: &[&str] = &[
    "new", "old", "good", "bad", "big", "small", "large", "little", "cheap", "expensive",
    "available", "fresh", "red", "blue", "green", "black", "white", "nice", "fine", "same",
    "other", "next", "last", "first", "second", "third",
];

const ADVERBS: &[&str] = &[
    "please", "now", "today", "tomorrow", "yesterday", "very", "really", "just", "only", "also",
    "too", "again", "here", "there", "soon", "always", "never", "not", "quickly", "maybe",
    "perhaps",
];

const INTERJECTIONS: &[&str] = &["hello", "hi", "hey", "thanks", "okay", "oh", "wow", "yes", "yeah"];

const BUILTIN_CLASSES: &[(PartOfSpeech, &[&str])] = &[
    (PartOfSpeech::Determiner, DETERMINERS),
    (PartOfSpeech::Pronoun, PRONOUNS),
    (PartOfSpeech::Preposition, PREPOSITIONS),
    (PartOfSpeech::Conjunction, CONJUNCTIONS),
    (PartOfSpeech::Verb, VERBS),
    (PartOfSpeech::Adjective, ADJECTIVES),
    (PartOfSpeech::Adverb, ADVERBS),
    (PartOfSpeech::Interjection, INTERJECTIONS),
];

/// Closed-class lexicon tagger. Words in the lexicon take their listed class,
/// anything with a digit is a number, unknown capitalized words are proper
/// nouns and everything else is a noun. Product words like "saree" or "iron"
/// are deliberately absent from the lists so they stay nouns.
#[derive(Clone, Debug)]
pub struct LexiconTagger {
    lexicon: HashMap<String, PartOfSpeech>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        for (part, words) in BUILTIN_CLASSES {
            for word in *words {
                lexicon.insert((*word).to_string(), *part);
            }
        }
        Self { lexicon }
    }

    /// Builtin lexicon extended by a TOML file. File entries win over the
    /// builtin class, so deployments can reclassify a builtin word.
    pub fn from_file(path: &Path) -> Result<Self, TaggerError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| TaggerError::ReadFile { path: path.to_path_buf(), source })?;
        let patch: LexiconPatch = toml::from_str(&raw)
            .map_err(|source| TaggerError::ParseFile { path: path.to_path_buf(), source })?;

        if patch.is_empty() {
            return Err(TaggerError::EmptyLexicon(path.to_path_buf()));
        }

        let mut tagger = Self::new();
        tagger.apply_patch(patch);
        Ok(tagger)
    }

    /// Tagger described by the application config: builtin lists, optionally
    /// extended from `lexicon_path`. This is the one startup step that can
    /// fail fatally.
    pub fn from_config(config: &TaggerConfig) -> Result<Self, TaggerError> {
        match &config.lexicon_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    fn apply_patch(&mut self, patch: LexiconPatch) {
        let sections = [
            (PartOfSpeech::Noun, patch.nouns),
            (PartOfSpeech::Pronoun, patch.pronouns),
            (PartOfSpeech::Verb, patch.verbs),
            (PartOfSpeech::Adjective, patch.adjectives),
            (PartOfSpeech::Adverb, patch.adverbs),
            (PartOfSpeech::Determiner, patch.determiners),
            (PartOfSpeech::Preposition, patch.prepositions),
            (PartOfSpeech::Conjunction, patch.conjunctions),
            (PartOfSpeech::Interjection, patch.interjections),
        ];

        for (part, words) in sections {
            for word in words {
                self.lexicon.insert(word.to_lowercase(), part);
            }
        }
    }

    fn classify(&self, word: &str) -> PartOfSpeech {
        let folded = word.to_lowercase();
        if let Some(part) = self.lexicon.get(folded.as_str()) {
            return *part;
        }
        if word.chars().any(|ch| ch.is_ascii_digit()) {
            return PartOfSpeech::Number;
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            return PartOfSpeech::ProperNoun;
        }
        PartOfSpeech::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord> {
        text.split_whitespace()
            .filter_map(|raw| {
                let word = trim_punctuation(raw);
                (!word.is_empty()).then(|| TaggedWord {
                    part: self.classify(word),
                    text: word.to_string(),
                })
            })
            .collect()
    }
}

/// Edge punctuation goes, interior punctuation stays, so "no.of" survives as
/// one word while "saree," loses its comma.
fn trim_punctuation(raw: &str) -> &str {
    raw.trim_matches(|ch: char| !ch.is_alphanumeric())
}

#[derive(Debug, Default, Deserialize)]
struct LexiconPatch {
    #[serde(default)]
    nouns: Vec<String>,
    #[serde(default)]
    pronouns: Vec<String>,
    #[serde(default)]
    verbs: Vec<String>,
    #[serde(default)]
    adjectives: Vec<String>,
    #[serde(default)]
    adverbs: Vec<String>,
    #[serde(default)]
    determiners: Vec<String>,
    #[serde(default)]
    prepositions: Vec<String>,
    #[serde(default)]
    conjunctions: Vec<String>,
    #[serde(default)]
    interjections: Vec<String>,
}

impl LexiconPatch {
    fn is_empty(&self) -> bool {
        self.nouns.is_empty()
            && self.pronouns.is_empty()
            && self.verbs.is_empty()
            && self.adjectives.is_empty()
            && self.adverbs.is_empty()
            && self.determiners.is_empty()
            && self.prepositions.is_empty()
            && self.conjunctions.is_empty()
            && self.interjections.is_empty()
    }
}
