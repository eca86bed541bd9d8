//! Word-of-the-day panel logic.
//!
//! Unlike the input panel, this one never falls back to the description
//! table: an unknown word simply reports that it has no synonyms.

use crate::data::ResultList;
use crate::lexicon::{self, vocabulary, LookupOutcome, Thesaurus};
use crate::widgets::ThemedButton;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct WordOfTheDayPanel {
    current: Option<&'static str>,
    pub results: ResultList,
    pub button: ThemedButton,
    rng: StdRng,
}

impl WordOfTheDayPanel {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Panel drawing words from a caller-supplied generator
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            current: None,
            results: ResultList::new(),
            button: ThemedButton::new("Word of the Day"),
            rng,
        }
    }

    /// Word picked by the last press, if any
    pub fn current_word(&self) -> Option<&'static str> {
        self.current
    }

    /// Label text; empty until the first press
    pub fn label(&self) -> String {
        match self.current {
            Some(word) => format!("Word of the Day: {}", word),
            None => String::new(),
        }
    }

    /// Pick a new word and show its synonyms
    pub fn advance(&mut self, thesaurus: &dyn Thesaurus) -> &'static str {
        let word = vocabulary::pick_with(&mut self.rng);
        self.current = Some(word);

        self.results.clear();
        self.results.push(line_for(thesaurus, word));
        tracing::info!("Word of the day: {}", word);
        word
    }
}

impl Default for WordOfTheDayPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// The single line shown for `word`
pub fn line_for(thesaurus: &dyn Thesaurus, word: &str) -> String {
    match lexicon::classify(thesaurus, word) {
        LookupOutcome::Synonyms(synonyms) => {
            format!("Synonyms for {}: {}", word, synonyms.join(", "))
        }
        LookupOutcome::OnlyItself | LookupOutcome::Unknown => {
            format!("No synonyms found for {}", word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::test_support::StubThesaurus;

    fn seeded() -> WordOfTheDayPanel {
        WordOfTheDayPanel::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_label_empty_before_first_press() {
        let panel = seeded();
        assert_eq!(panel.label(), "");
        assert!(panel.current_word().is_none());
        assert!(panel.results.is_empty());
    }

    #[test]
    fn test_advance_sets_label_and_single_line() {
        let thesaurus = StubThesaurus::new();
        let mut panel = seeded();

        let word = panel.advance(&thesaurus);
        assert!(vocabulary::WORDS.contains(&word));
        assert_eq!(panel.current_word(), Some(word));
        assert_eq!(panel.label(), format!("Word of the Day: {}", word));
        assert_eq!(panel.results.len(), 1);
    }

    #[test]
    fn test_advance_replaces_previous_line() {
        let thesaurus = StubThesaurus::new();
        let mut panel = seeded();
        for _ in 0..5 {
            panel.advance(&thesaurus);
            assert_eq!(panel.results.len(), 1);
        }
    }

    #[test]
    fn test_synonym_line_format() {
        let thesaurus = StubThesaurus::new().with("lucid", &["lucid", "clear", "limpid"]);
        let line = line_for(&thesaurus, "lucid");

        let rest = line
            .strip_prefix("Synonyms for lucid: ")
            .expect("line starts with the word");
        let mut parts: Vec<&str> = rest.split(", ").collect();
        parts.sort();
        assert_eq!(parts, vec!["clear", "limpid"]);
    }

    #[test]
    fn test_no_fallback_description() {
        let thesaurus = StubThesaurus::new();
        assert_eq!(line_for(&thesaurus, "sonder"), "No synonyms found for sonder");
    }

    #[test]
    fn test_only_itself_reports_none() {
        let thesaurus = StubThesaurus::new().with("nadir", &["Nadir"]);
        assert_eq!(line_for(&thesaurus, "nadir"), "No synonyms found for nadir");
    }
}
