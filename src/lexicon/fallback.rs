//! Hand-written descriptions for words WordNet has no entry for.

const DESCRIPTIONS: [(&str, &str); 9] = [
    (
        "sonder",
        "The realization that each passerby has a life as vivid and complex as your own.",
    ),
    ("oniric", "Related to dreams or the dream state."),
    (
        "petrichor",
        "The pleasant, earthy scent produced when rain falls on dry soil or ground.",
    ),
    (
        "serendipity",
        "The occurrence of events by chance in a happy or beneficial way.",
    ),
    ("ephemeral", "Lasting for a very short time."),
    ("quixotic", "Extremely idealistic; unrealistic and impractical."),
    ("pulchritude", "Physical beauty."),
    ("effervescent", "Bubbly, vivacious, or enthusiastic."),
    (
        "panacea",
        "A solution or remedy for all problems or difficulties.",
    ),
];

/// Description for `word`, matched case-insensitively
pub fn describe(word: &str) -> Option<&'static str> {
    let word = word.to_lowercase();
    DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, description)| *description)
}

/// Every word that has a description
#[cfg(test)]
pub fn words() -> impl Iterator<Item = &'static str> {
    DESCRIPTIONS.iter().map(|(word, _)| *word)
}
