//! Lexical data layer
//!
//! Everything the panels need to know about words: the synonym lookup service
//! (backed by a WordNet dictionary on disk), the compiled-in vocabulary list
//! used for the word of the day, and the fallback descriptions for words
//! WordNet does not know.
//!
//! Nothing in here touches the terminal.

pub mod fallback;
pub mod morphy;
pub mod vocabulary;
pub mod wordnet;

use std::collections::HashSet;

pub use wordnet::WordNet;

/// Synonym lookup service.
///
/// Implementations never fail: an unknown word (or a database problem) yields
/// an empty set.
pub trait Thesaurus {
    /// Every lemma sharing a sense with `word`, across all parts of speech.
    /// May contain `word` itself.
    fn synonyms(&self, word: &str) -> HashSet<String>;
}

/// The four WordNet parts of speech, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// File suffix used by the dictionary (`index.noun`, `noun.exc`, ...)
    pub fn file_suffix(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Parse the pos column of an index file. Satellite adjectives (`s`) are
    /// stored with the adjectives.
    pub fn from_index_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

/// A synonym set after the queried word has been taken out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// At least one synonym other than the word itself
    Synonyms(Vec<String>),
    /// The database knows the word but lists no other lemma
    OnlyItself,
    /// The database returned nothing
    Unknown,
}

/// Look `word` up and drop every entry equal to it (ignoring case).
///
/// Synonyms keep the set's iteration order.
pub fn classify(thesaurus: &dyn Thesaurus, word: &str) -> LookupOutcome {
    let found = thesaurus.synonyms(word);
    tracing::debug!("Lookup '{}' returned {} lemma(s)", word, found.len());

    if found.is_empty() {
        return LookupOutcome::Unknown;
    }

    let needle = word.to_lowercase();
    let others: Vec<String> = found
        .into_iter()
        .filter(|synonym| synonym.to_lowercase() != needle)
        .collect();

    if others.is_empty() {
        LookupOutcome::OnlyItself
    } else {
        LookupOutcome::Synonyms(others)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Thesaurus;
    use std::collections::{HashMap, HashSet};

    /// In-memory thesaurus keyed by exact word
    #[derive(Default)]
    pub struct StubThesaurus {
        entries: HashMap<String, HashSet<String>>,
    }

    impl StubThesaurus {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, word: &str, synonyms: &[&str]) -> Self {
            self.entries.insert(
                word.to_string(),
                synonyms.iter().map(|s| s.to_string()).collect(),
            );
            self
        }
    }

    impl Thesaurus for StubThesaurus {
        fn synonyms(&self, word: &str) -> HashSet<String> {
            self.entries.get(word).cloned().unwrap_or_default()
        }
    }
}
