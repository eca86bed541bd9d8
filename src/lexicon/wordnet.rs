//! WordNet dictionary reader.
//!
//! Reads the plain-text database shipped with WordNet 3.x (and by NLTK's
//! `wordnet` corpus): `index.<pos>` files map lemmas to synset byte offsets,
//! `data.<pos>` files hold one synset per line at those offsets, and the
//! optional `<pos>.exc` files list irregular inflections.
//!
//! Index files are parsed once at startup. Data files are memory-mapped and
//! synset lines are sliced out on demand.

use super::morphy::{self, ExceptionList};
use super::{PartOfSpeech, Thesaurus};
use crate::config::Config;
use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Standard WordNet environment variable pointing at the dict directory
pub const SEARCH_DIR_ENV: &str = "WNSEARCHDIR";

/// Lookup tables for one part of speech
struct PosTables {
    pos: PartOfSpeech,
    index: HashMap<String, Vec<u64>>,
    data: Mmap,
    exceptions: ExceptionList,
}

/// A WordNet dictionary opened from disk
pub struct WordNet {
    dir: PathBuf,
    tables: Vec<PosTables>,
}

impl WordNet {
    /// Open the dictionary in `dir`.
    ///
    /// Every `index.<pos>` and `data.<pos>` file must be present; exception
    /// lists are optional.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("WordNet directory {:?} does not exist", dir);
        }

        let mut tables = Vec::with_capacity(PartOfSpeech::ALL.len());
        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();

            let index_path = dir.join(format!("index.{}", suffix));
            let contents = fs::read_to_string(&index_path)
                .with_context(|| format!("Failed to read {:?}", index_path))?;
            let index = parse_index(&contents);

            let data_path = dir.join(format!("data.{}", suffix));
            let file = File::open(&data_path)
                .with_context(|| format!("Failed to open {:?}", data_path))?;
            // SAFETY: the map is only sound while nothing truncates or rewrites
            // data.<pos> underneath it. WordNet dictionaries are installed
            // read-only data and are not modified while the process runs;
            // a file shrunk under the map would fault on the next lookup.
            let data = unsafe { Mmap::map(&file) }
                .with_context(|| format!("Failed to map {:?}", data_path))?;

            let exc_path = dir.join(format!("{}.exc", suffix));
            let exceptions = match fs::read_to_string(&exc_path) {
                Ok(contents) => ExceptionList::parse(&contents),
                Err(e) => {
                    tracing::debug!("No exception list at {:?}: {}", exc_path, e);
                    ExceptionList::default()
                }
            };

            tracing::info!(
                "Loaded WordNet {}: {} lemmas, {} exceptions",
                suffix,
                index.len(),
                exceptions.len()
            );

            tables.push(PosTables {
                pos,
                index,
                data,
                exceptions,
            });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            tables,
        })
    }

    /// Find a WordNet dictionary directory.
    ///
    /// An explicit directory must be valid. Otherwise the usual install
    /// locations are searched, including NLTK's download directory.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return dict_dir_within(dir).with_context(|| {
                format!("No WordNet dictionary (index.noun) found in {:?}", dir)
            });
        }

        let mut candidates = Vec::new();
        if let Ok(dir) = std::env::var(SEARCH_DIR_ENV) {
            candidates.push(PathBuf::from(dir));
        }
        if let Ok(dir) = Config::bundled_wordnet_dir() {
            candidates.push(dir);
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join("nltk_data").join("corpora").join("wordnet"));
        }
        candidates.push(PathBuf::from("/usr/share/wordnet"));
        candidates.push(PathBuf::from("/usr/local/share/wordnet"));

        for candidate in &candidates {
            if let Some(dir) = dict_dir_within(candidate) {
                return Ok(dir);
            }
        }

        bail!(
            "No WordNet dictionary found (searched {:?}). Install WordNet, \
             download NLTK's wordnet corpus, or pass --wordnet-dir",
            candidates
        )
    }

    /// Directory the dictionary was opened from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of index entries across all parts of speech
    pub fn lemma_count(&self) -> usize {
        self.tables.iter().map(|t| t.index.len()).sum()
    }

    fn read_synset(tables: &PosTables, offset: u64) -> Result<Vec<String>> {
        let start = usize::try_from(offset).context("synset offset overflows usize")?;
        if start >= tables.data.len() {
            bail!("offset {} is past the end of data.{}", offset, tables.pos.file_suffix());
        }

        let rest = &tables.data[start..];
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let line = std::str::from_utf8(&rest[..end]).context("synset line is not UTF-8")?;
        parse_synset_lemmas(line, offset)
    }
}

impl Thesaurus for WordNet {
    fn synonyms(&self, word: &str) -> HashSet<String> {
        let lemma = word.to_lowercase();
        let mut synonyms = HashSet::new();
        if lemma.is_empty() {
            return synonyms;
        }

        let mut visited = HashSet::new();
        for tables in &self.tables {
            let forms = morphy::base_forms(&lemma, tables.pos, Some(&tables.exceptions), |f| {
                tables.index.contains_key(f)
            });

            for form in forms {
                let Some(offsets) = tables.index.get(&form) else {
                    continue;
                };
                for &offset in offsets {
                    if !visited.insert((tables.pos, offset)) {
                        continue;
                    }
                    match Self::read_synset(tables, offset) {
                        Ok(lemmas) => synonyms.extend(lemmas),
                        Err(e) => tracing::warn!(
                            "Skipping {} synset {} for '{}': {:#}",
                            tables.pos.file_suffix(),
                            offset,
                            form,
                            e
                        ),
                    }
                }
            }
        }

        synonyms
    }
}

/// Accept `dir` itself or a `dict/` child holding `index.noun`
fn dict_dir_within(dir: &Path) -> Option<PathBuf> {
    [dir.to_path_buf(), dir.join("dict")]
        .into_iter()
        .find(|candidate| candidate.join("index.noun").is_file())
}

/// Parse an index file into lemma -> synset offsets. Malformed lines are
/// logged and skipped.
fn parse_index(contents: &str) -> HashMap<String, Vec<u64>> {
    let mut index = HashMap::new();
    for (line_no, line) in contents.lines().enumerate() {
        // License header lines start with a space
        if line.is_empty() || line.starts_with(' ') {
            continue;
        }
        match parse_index_line(line) {
            Ok((lemma, offsets)) => {
                index.insert(lemma, offsets);
            }
            Err(e) => tracing::warn!("Bad index line {}: {:#}", line_no + 1, e),
        }
    }
    index
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt offset...`
fn parse_index_line(line: &str) -> Result<(String, Vec<u64>)> {
    let mut fields = line.split_ascii_whitespace();

    let lemma = fields.next().context("missing lemma")?;
    let tag = fields.next().context("missing pos")?;
    if PartOfSpeech::from_index_tag(tag).is_none() {
        bail!("unknown pos '{}'", tag);
    }
    let synset_cnt: usize = fields
        .next()
        .context("missing synset_cnt")?
        .parse()
        .context("bad synset_cnt")?;
    let p_cnt: usize = fields
        .next()
        .context("missing p_cnt")?
        .parse()
        .context("bad p_cnt")?;

    // pointer symbols, then sense_cnt and tagsense_cnt
    for _ in 0..p_cnt + 2 {
        fields.next().context("index line ends early")?;
    }

    let offsets = fields
        .take(synset_cnt)
        .map(|f| f.parse::<u64>().with_context(|| format!("bad offset '{}'", f)))
        .collect::<Result<Vec<_>>>()?;
    if offsets.len() != synset_cnt {
        bail!("expected {} offsets, found {}", synset_cnt, offsets.len());
    }

    Ok((lemma.to_string(), offsets))
}

/// `offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] ...`
///
/// Returns the synset's lemma names. The line must start with `offset`.
fn parse_synset_lemmas(line: &str, offset: u64) -> Result<Vec<String>> {
    let mut fields = line.split_ascii_whitespace();

    let found: u64 = fields
        .next()
        .context("empty synset line")?
        .parse()
        .context("bad synset offset")?;
    if found != offset {
        bail!("line at {} starts with offset {}", offset, found);
    }

    fields.next().context("missing lex_filenum")?;
    fields.next().context("missing ss_type")?;
    let w_cnt = usize::from_str_radix(fields.next().context("missing w_cnt")?, 16)
        .context("bad w_cnt")?;

    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = fields.next().context("synset word list ends early")?;
        fields.next().context("missing lex_id")?;
        lemmas.push(strip_syntactic_marker(word).to_string());
    }
    Ok(lemmas)
}

/// Adjectives may carry `(a)`, `(p)` or `(ip)` after the word
fn strip_syntactic_marker(word: &str) -> &str {
    for marker in ["(a)", "(p)", "(ip)"] {
        if let Some(stripped) = word.strip_suffix(marker) {
            return stripped;
        }
    }
    word
}


#[cfg(test)]
mod tests {
    use super::fixture::DictBuilder;
    use super::*;

    fn sample_dict() -> (tempfile::TempDir, WordNet) {
        let dir = tempfile::tempdir().unwrap();
        DictBuilder::new()
            .synset(PartOfSpeech::Noun, &["dog", "domestic_dog", "Canis_familiaris"])
            .synset(PartOfSpeech::Noun, &["nadir"])
            .synset(PartOfSpeech::Noun, &["goose"])
            .synset(PartOfSpeech::Noun, &["run", "tally"])
            .synset(PartOfSpeech::Verb, &["run", "go"])
            .synset(PartOfSpeech::Adjective, &["happy"])
            .synset(PartOfSpeech::Adjective, &["felicitous", "happy"])
            .synset(PartOfSpeech::Adjective, &["glad(p)", "happy"])
            .synset(PartOfSpeech::Adverb, &["merrily", "happily"])
            .exception(PartOfSpeech::Noun, "geese goose")
            .write(dir.path());
        let wordnet = WordNet::open(dir.path()).expect("fixture opens");
        (dir, wordnet)
    }

    fn sorted(set: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn test_synonyms_across_synsets() {
        let (_dir, wordnet) = sample_dict();
        assert_eq!(
            sorted(wordnet.synonyms("happy")),
            vec!["felicitous", "glad", "happy"]
        );
    }

    #[test]
    fn test_synonyms_across_parts_of_speech() {
        let (_dir, wordnet) = sample_dict();
        assert_eq!(sorted(wordnet.synonyms("run")), vec!["go", "run", "tally"]);
    }

    #[test]
    fn test_case_preserved_and_query_lowercased() {
        let (_dir, wordnet) = sample_dict();
        let synonyms = wordnet.synonyms("DOG");
        assert!(synonyms.contains("Canis_familiaris"));
        assert!(synonyms.contains("domestic_dog"));
        assert!(synonyms.contains("dog"));
    }

    #[test]
    fn test_inflected_query() {
        let (_dir, wordnet) = sample_dict();
        assert!(wordnet.synonyms("dogs").contains("domestic_dog"));
        assert!(wordnet.synonyms("goes").contains("run"));
        assert_eq!(sorted(wordnet.synonyms("geese")), vec!["goose"]);
    }

    #[test]
    fn test_only_itself() {
        let (_dir, wordnet) = sample_dict();
        assert_eq!(sorted(wordnet.synonyms("nadir")), vec!["nadir"]);
    }

    #[test]
    fn test_unknown_and_empty_words() {
        let (_dir, wordnet) = sample_dict();
        assert!(wordnet.synonyms("sonder").is_empty());
        assert!(wordnet.synonyms("").is_empty());
        assert!(wordnet.synonyms("   ").is_empty());
    }

    #[test]
    fn test_lemma_count() {
        let (dir, wordnet) = sample_dict();
        // noun: dog domestic_dog canis_familiaris nadir goose run tally
        // verb: run go; adj: happy felicitous glad; adv: merrily happily
        assert_eq!(wordnet.lemma_count(), 14);
        assert_eq!(wordnet.dir(), dir.path());
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordNet::open(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_open_incomplete_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.noun"), "").unwrap();
        assert!(WordNet::open(dir.path()).is_err());
    }

    #[test]
    fn test_locate_explicit() {
        let dir = tempfile::tempdir().unwrap();
        DictBuilder::new().write(dir.path());
        assert_eq!(WordNet::locate(Some(dir.path())).unwrap(), dir.path());

        let parent = tempfile::tempdir().unwrap();
        let nested = parent.path().join("dict");
        fs::create_dir(&nested).unwrap();
        DictBuilder::new().write(&nested);
        assert_eq!(WordNet::locate(Some(parent.path())).unwrap(), nested);

        let empty = tempfile::tempdir().unwrap();
        assert!(WordNet::locate(Some(empty.path())).is_err());
    }

    /// Serializes tests that change process environment variables
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn set_env(key: &str, value: Option<&Path>) {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    #[test]
    fn test_locate_search_order() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved_search = std::env::var_os(SEARCH_DIR_ENV);
        let saved_data = std::env::var_os(crate::config::DATA_DIR_ENV);

        let search_dir = tempfile::tempdir().unwrap();
        DictBuilder::new().write(search_dir.path());
        let data_dir = tempfile::tempdir().unwrap();
        let bundled = data_dir.path().join("wordnet");
        fs::create_dir(&bundled).unwrap();
        DictBuilder::new().write(&bundled);

        set_env(SEARCH_DIR_ENV, Some(search_dir.path()));
        set_env(crate::config::DATA_DIR_ENV, Some(data_dir.path()));
        let first = WordNet::locate(None);

        set_env(SEARCH_DIR_ENV, None);
        let second = WordNet::locate(None);

        let empty_search = tempfile::tempdir().unwrap();
        let empty_data = tempfile::tempdir().unwrap();
        set_env(SEARCH_DIR_ENV, Some(empty_search.path()));
        set_env(crate::config::DATA_DIR_ENV, Some(empty_data.path()));
        let fallback = WordNet::locate(None);

        std::env::remove_var(SEARCH_DIR_ENV);
        std::env::remove_var(crate::config::DATA_DIR_ENV);
        if let Some(value) = saved_search {
            std::env::set_var(SEARCH_DIR_ENV, value);
        }
        if let Some(value) = saved_data {
            std::env::set_var(crate::config::DATA_DIR_ENV, value);
        }

        assert_eq!(first.unwrap(), search_dir.path());
        assert_eq!(second.unwrap(), bundled);
        // Neither fixture holds a dictionary, so only system locations can match
        match fallback {
            Ok(dir) => {
                assert!(!dir.starts_with(empty_search.path()));
                assert!(!dir.starts_with(empty_data.path()));
            }
            Err(e) => {
                let message = e.to_string();
                assert!(message.contains("No WordNet dictionary found"));
                assert!(message.contains("--wordnet-dir"));
                assert!(message.contains(&format!("{:?}", empty_search.path())));
            }
        }
    }

    #[test]
    fn test_parse_index_line() {
        let (lemma, offsets) =
            parse_index_line("happy a 4 3 ! & + 4 4 01148283 01051382 01047301 01151373  ")
                .unwrap();
        assert_eq!(lemma, "happy");
        assert_eq!(offsets, vec![1148283, 1051382, 1047301, 1151373]);

        assert!(parse_index_line("happy a 2 0 2 2 01148283").is_err());
        assert!(parse_index_line("happy q 1 0 1 1 01148283").is_err());
    }

    #[test]
    fn test_parse_index_skips_header_and_bad_lines() {
        let index = parse_index("  1 license text\nnadir n 1 0 1 0 00000042\nbroken n x\n");
        assert_eq!(index.len(), 1);
        assert_eq!(index["nadir"], vec![42]);
    }

    #[test]
    fn test_parse_synset_lemmas() {
        let line = "01148283 00 a 03 happy 0 felicitous 0 galore(ip) 0 000 | enjoying good fortune";
        assert_eq!(
            parse_synset_lemmas(line, 1148283).unwrap(),
            vec!["happy", "felicitous", "galore"]
        );
        assert!(parse_synset_lemmas(line, 42).is_err());
        assert!(parse_synset_lemmas("00000042 00 n 02 lonely 0", 42).is_err());
    }

    #[test]
    fn test_strip_syntactic_marker() {
        assert_eq!(strip_syntactic_marker("glad(p)"), "glad");
        assert_eq!(strip_syntactic_marker("galore(ip)"), "galore");
        assert_eq!(strip_syntactic_marker("elder(a)"), "elder");
        assert_eq!(strip_syntactic_marker("dog"), "dog");
    }
}
