//! Input panel logic: look up a typed word and list its synonyms.

use crate::data::ResultList;
use crate::lexicon::{self, fallback, LookupOutcome, Thesaurus};
use crate::widgets::{EntryField, ThemedButton};

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry was blank after trimming; nothing changed
    Ignored,
    /// Results were rebuilt and the entry cleared
    Displayed,
}

pub struct InputPanel {
    pub entry: EntryField,
    pub results: ResultList,
    pub find_button: ThemedButton,
    pub clear_button: ThemedButton,
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            entry: EntryField::new(),
            results: ResultList::new(),
            find_button: ThemedButton::new("Find Synonym"),
            clear_button: ThemedButton::new("Clear"),
        }
    }

    /// Look up the entry text and rebuild the result list
    pub fn submit(&mut self, thesaurus: &dyn Thesaurus) -> SubmitOutcome {
        let raw = self.entry.text();
        let word = raw.trim();
        if word.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.results.clear();
        for line in lines_for(thesaurus, word) {
            self.results.push(line);
        }
        tracing::info!("Looked up '{}': {} line(s)", word, self.results.len());

        self.entry.clear();
        SubmitOutcome::Displayed
    }

    /// Empty the result list; the entry is left alone
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// The lines the input panel shows for `word` (already trimmed, non-empty)
pub fn lines_for(thesaurus: &dyn Thesaurus, word: &str) -> Vec<String> {
    match lexicon::classify(thesaurus, word) {
        LookupOutcome::Synonyms(synonyms) => synonyms,
        LookupOutcome::OnlyItself => {
            vec![format!("No synonyms found except the word itself: '{}'", word)]
        }
        LookupOutcome::Unknown => match fallback::describe(word) {
            Some(description) => vec![format!("Description: {}", description)],
            None => vec![format!("No synonyms found for '{}'", word)],
        },
    }
}
