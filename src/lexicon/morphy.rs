//! Reduce inflected words to the base forms WordNet indexes.
//!
//! Mirrors WordNet's morphy: an exception list for irregular forms, then
//! suffix detachment rules applied until something matches the index.

use super::PartOfSpeech;
use std::collections::{HashMap, HashSet};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Irregular inflections from a `<pos>.exc` file
#[derive(Debug, Default, Clone)]
pub struct ExceptionList {
    bases: HashMap<String, Vec<String>>,
}

impl ExceptionList {
    /// Parse lines of `inflected base [base ...]`
    pub fn parse(contents: &str) -> Self {
        let mut bases = HashMap::new();
        for line in contents.lines() {
            let mut fields = line.split_whitespace();
            if let Some(inflected) = fields.next() {
                let forms: Vec<String> = fields.map(str::to_string).collect();
                if !forms.is_empty() {
                    bases.insert(inflected.to_string(), forms);
                }
            }
        }
        Self { bases }
    }

    pub fn get(&self, inflected: &str) -> Option<&[String]> {
        self.bases.get(inflected).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }
}

fn apply_rules(forms: &[String], pos: PartOfSpeech) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                out.push(format!("{}{}", stem, replacement));
            }
        }
    }
    out
}

fn keep_known<F>(forms: Vec<String>, known: &F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|form| known(form.as_str()) && seen.insert(form.clone()))
        .collect()
}

/// Base forms of `form` for one part of speech.
///
/// `known` answers whether the index has an entry for a lemma in `pos`.
/// Returns an empty list when nothing reduces to a known lemma.
pub fn base_forms<F>(
    form: &str,
    pos: PartOfSpeech,
    exceptions: Option<&ExceptionList>,
    known: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(irregular) = exceptions.and_then(|list| list.get(form)) {
        let mut candidates = vec![form.to_string()];
        candidates.extend(irregular.iter().cloned());
        return keep_known(candidates, &known);
    }

    let mut forms = apply_rules(&[form.to_string()], pos);
    let mut first = vec![form.to_string()];
    first.extend(forms.iter().cloned());
    let results = keep_known(first, &known);
    if !results.is_empty() {
        return results;
    }

    // Every rule shortens or keeps the word length, so this bottoms out
    let mut visited: HashSet<String> = forms.iter().cloned().collect();
    while !forms.is_empty() {
        forms = apply_rules(&forms, pos)
            .into_iter()
            .filter(|f| visited.insert(f.clone()))
            .collect();
        let results = keep_known(forms.clone(), &known);
        if !results.is_empty() {
            return results;
        }
    }

    Vec::new()
}
