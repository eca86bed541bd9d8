//! Curated vocabulary for the word of the day.

use rand::seq::SliceRandom;
use rand::Rng;

pub const WORDS: [&str; 55] = [
    "ephemeral",
    "loquacious",
    "eloquent",
    "melancholy",
    "serendipity",
    "epiphany",
    "sonder",
    "sonorous",
    "petrichor",
    "surreptitious",
    "acumen",
    "incandescent",
    "nadir",
    "effervescent",
    "lagniappe",
    "ethereal",
    "inexorable",
    "lucid",
    "recalcitrant",
    "panacea",
    "quixotic",
    "limerence",
    "sagacity",
    "plethora",
    "elixir",
    "languor",
    "perfidious",
    "panegyric",
    "taciturn",
    "soliloquy",
    "bombastic",
    "catharsis",
    "quintessential",
    "zeitgeist",
    "alchemy",
    "inimitable",
    "idyllic",
    "sumptuous",
    "magnanimous",
    "celestial",
    "pulchritude",
    "raconteur",
    "palimpsest",
    "paradigm",
    "verisimilitude",
    "ubiquitous",
    "seraphic",
    "oniric",
    "tenebrous",
    "ineffable",
    "epicurean",
    "luminous",
    "eudaimonia",
    "sapient",
    "parsimonious",
];

/// Pick a word uniformly at random
pub fn pick() -> &'static str {
    pick_with(&mut rand::thread_rng())
}

/// Pick a word using the caller's generator
pub fn pick_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // WORDS is a non-empty const array
    WORDS.choose(rng).copied().unwrap_or(WORDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_list_has_no_duplicates() {
        let unique: HashSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn test_words_are_lowercase() {
        assert!(WORDS.iter().all(|w| *w == w.to_lowercase()));
    }

    #[test]
    fn test_pick_stays_in_list() {
        for _ in 0..1000 {
            let word = pick();
            assert!(WORDS.contains(&word), "{} is not in the vocabulary", word);
        }
    }

    #[test]
    fn test_seeded_pick_covers_several_words() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..1000).map(|_| pick_with(&mut rng)).collect();
        assert!(seen.iter().all(|w| WORDS.contains(w)));
        // 1000 draws over 55 words; far more than one distinct word
        assert!(seen.len() > 10);
    }
}
