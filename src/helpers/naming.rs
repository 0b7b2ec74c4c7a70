//! Session name generator
//!
//! Generates memorable `action-adjective-noun` names for sessions, like
//! `dancing-purple-walrus`, and recognizes names produced this way so that
//! auto-named sessions can be told apart from ones the user named.
//!
//! # Example
//!
//! ```
//! use shadow_agent_utils::helpers::{generate_identifier, is_generated_identifier};
//!
//! let name = generate_identifier();
//! assert!(is_generated_identifier(&name));
//! assert!(!is_generated_identifier("my-project"));
//! ```

use std::path::Path;
use std::sync::LazyLock;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{UtilError, UtilResult};

/// Separator between the three name segments
pub const SEPARATOR: char = '-';

const DEFAULT_ACTIONS: &[&str] = &[
    "running", "jumping", "walking", "skipping", "hopping", "flying", "swimming", "crawling",
    "sneaking", "sprinting", "sneaking", "dancing", "singing", "laughing",
];

const DEFAULT_ADJECTIVES: &[&str] = &[
    "funny", "happy", "sad", "angry", "silly", "crazy", "sneaky", "sleepy", "hungry",
    // colors
    "red", "blue", "green", "pink", "purple", "yellow", "orange",
];

const DEFAULT_NOUNS: &[&str] = &[
    "cat", "dog", "rat", "mouse", "fish", "elephant", "dinosaur",
    // birds
    "bird", "pelican",
    // fictional
    "dragon", "unicorn", "mermaid", "monster", "alien", "robot",
    // sea creatures
    "whale", "shark", "walrus", "octopus", "squid", "jellyfish", "starfish", "penguin", "seal",
];

static DEFAULT_GENERATOR: LazyLock<NameGenerator> = LazyLock::new(NameGenerator::new);

/// The three word lists names are built from
///
/// Lists keep their order and duplicates: a word listed twice is drawn twice
/// as often. A word may also appear in more than one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    actions: Vec<String>,
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

/// On-disk shape of a vocabulary, validated before use
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    actions: Vec<String>,
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl Vocabulary {
    /// Create a vocabulary from three word lists
    ///
    /// Every list must be non-empty and every word must be lowercase ASCII
    /// letters only.
    pub fn new(
        actions: Vec<String>,
        adjectives: Vec<String>,
        nouns: Vec<String>,
    ) -> UtilResult<Self> {
        validate_words("actions", &actions)?;
        validate_words("adjectives", &adjectives)?;
        validate_words("nouns", &nouns)?;

        Ok(Self {
            actions,
            adjectives,
            nouns,
        })
    }

    /// Parse a vocabulary from JSON
    ///
    /// Expects `{"actions": [...], "adjectives": [...], "nouns": [...]}`.
    pub fn from_json(json: &str) -> UtilResult<Self> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        Self::new(file.actions, file.adjectives, file.nouns)
    }

    /// Load a vocabulary from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> UtilResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("[NameGenerator] Loading vocabulary from {:?}", path);
        Self::from_json(&json)
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// Whether `word` appears in any of the three lists (case-sensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.actions
            .iter()
            .chain(&self.adjectives)
            .chain(&self.nouns)
            .any(|w| w == word)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self {
            actions: owned(DEFAULT_ACTIONS),
            adjectives: owned(DEFAULT_ADJECTIVES),
            nouns: owned(DEFAULT_NOUNS),
        }
    }
}

fn validate_words(list: &str, words: &[String]) -> UtilResult<()> {
    if words.is_empty() {
        return Err(UtilError::invalid_vocabulary(format!("{} is empty", list)));
    }

    if let Some(bad) = words
        .iter()
        .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_lowercase()))
    {
        return Err(UtilError::invalid_vocabulary(format!(
            "{} contains {:?}, words must be lowercase letters only",
            list, bad
        )));
    }

    Ok(())
}

/// Generates and recognizes `action-adjective-noun` session names
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    vocabulary: Vocabulary,
}

impl NameGenerator {
    /// Create a generator over the built-in vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator over a custom vocabulary
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Generate a name using the thread-local random generator
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a name drawing from the given random generator
    ///
    /// Each segment is picked independently and uniformly from its list.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let action = pick(&self.vocabulary.actions, rng);
        let adjective = pick(&self.vocabulary.adjectives, rng);
        let noun = pick(&self.vocabulary.nouns, rng);

        let name = format!("{action}{SEPARATOR}{adjective}{SEPARATOR}{noun}");
        tracing::debug!("[NameGenerator] Generated name: {}", name);
        name
    }

    /// Whether `name` looks like a generated name
    ///
    /// Requires exactly two separators and every segment to come from the
    /// vocabulary. Which list a segment comes from is not checked, so
    /// `cat-running-happy` is accepted too.
    pub fn is_generated(&self, name: &str) -> bool {
        name.matches(SEPARATOR).count() == 2
            && name
                .split(SEPARATOR)
                .all(|segment| self.vocabulary.contains(segment))
    }
}

// Lists are non-empty by construction, so the range is never empty.
fn pick<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> &'a str {
    &words[rng.random_range(0..words.len())]
}

/// Generate a session name from the built-in vocabulary
pub fn generate_identifier() -> String {
    DEFAULT_GENERATOR.generate()
}

/// Whether `name` could have come from [`generate_identifier`]
pub fn is_generated_identifier(name: &str) -> bool {
    DEFAULT_GENERATOR.is_generated(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_default_vocabulary_is_valid() {
        let vocab = Vocabulary::default();
        let validated = Vocabulary::new(
            vocab.actions().to_vec(),
            vocab.adjectives().to_vec(),
            vocab.nouns().to_vec(),
        )
        .unwrap();
        assert_eq!(validated, vocab);
        assert_eq!(vocab.actions().len(), 14);
        assert_eq!(vocab.adjectives().len(), 16);
        assert_eq!(vocab.nouns().len(), 24);
    }

    #[test]
    fn test_generated_name_shape() {
        let name = generate_identifier();
        let parts: Vec<&str> = name.split(SEPARATOR).collect();
        assert_eq!(parts.len(), 3);

        let vocab = Vocabulary::default();
        assert!(vocab.actions().iter().any(|w| w == parts[0]));
        assert!(vocab.adjectives().iter().any(|w| w == parts[1]));
        assert!(vocab.nouns().iter().any(|w| w == parts[2]));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = NameGenerator::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(generator.generate_with(&mut a), generator.generate_with(&mut b));
        }
    }

    #[test]
    fn test_single_word_vocabulary() {
        let vocab = Vocabulary::new(words(&["waving"]), words(&["tiny"]), words(&["crab"])).unwrap();
        let generator = NameGenerator::with_vocabulary(vocab);

        assert_eq!(generator.generate(), "waving-tiny-crab");
        assert!(generator.is_generated("waving-tiny-crab"));
        assert!(!generator.is_generated("running-happy-cat"));
    }

    #[test]
    fn test_rejects_malformed_names() {
        assert!(!is_generated_identifier(""));
        assert!(!is_generated_identifier("a-b"));
        assert!(!is_generated_identifier("a-b-c-d"));
        assert!(!is_generated_identifier("xyz-unknown-word"));
        assert!(!is_generated_identifier("running-happy"));
        assert!(!is_generated_identifier("running-happy-cat-dog"));
        assert!(!is_generated_identifier("running--cat"));
        assert!(!is_generated_identifier("running-happy-"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(is_generated_identifier("running-happy-cat"));
        assert!(!is_generated_identifier("Running-happy-cat"));
        assert!(!is_generated_identifier("running-HAPPY-cat"));
    }

    #[test]
    fn test_segment_order_is_not_checked() {
        assert!(is_generated_identifier("cat-running-happy"));
        assert!(is_generated_identifier("seal-seal-seal"));
    }

    #[test]
    fn test_invalid_vocabulary() {
        let err = Vocabulary::new(vec![], words(&["tiny"]), words(&["crab"])).unwrap_err();
        assert!(matches!(err, UtilError::InvalidVocabulary(_)));

        let err = Vocabulary::new(words(&["wav-ing"]), words(&["tiny"]), words(&["crab"]))
            .unwrap_err();
        assert!(err.to_string().contains("wav-ing"));

        assert!(Vocabulary::new(words(&["Waving"]), words(&["tiny"]), words(&["crab"])).is_err());
        assert!(Vocabulary::new(words(&["waving"]), words(&["tiny one"]), words(&["crab"])).is_err());
        assert!(Vocabulary::new(words(&["waving"]), words(&["tiny"]), words(&[""])).is_err());
    }

    #[test]
    fn test_vocabulary_from_json() {
        let vocab = Vocabulary::from_json(
            r#"{"actions": ["waving"], "adjectives": ["tiny", "shy"], "nouns": ["crab"]}"#,
        )
        .unwrap();
        assert_eq!(vocab.adjectives(), &["tiny".to_string(), "shy".to_string()]);

        let err = Vocabulary::from_json(r#"{"actions": ["waving"]}"#).unwrap_err();
        assert!(matches!(err, UtilError::Serialization(_)));

        let err =
            Vocabulary::from_json(r#"{"actions": [], "adjectives": ["tiny"], "nouns": ["crab"]}"#)
                .unwrap_err();
        assert!(matches!(err, UtilError::InvalidVocabulary(_)));
    }

    #[test]
    fn test_vocabulary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        let json = serde_json::to_string(&Vocabulary::default()).unwrap();
        std::fs::write(&path, json).unwrap();

        assert_eq!(Vocabulary::from_file(&path).unwrap(), Vocabulary::default());

        let err = Vocabulary::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, UtilError::Io(_)));
    }

    proptest! {
        #[test]
        fn prop_generated_names_are_recognized(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let name = NameGenerator::new().generate_with(&mut rng);
            prop_assert!(is_generated_identifier(&name));
        }

        #[test]
        fn prop_wrong_order_is_recognized(
            noun in 0..DEFAULT_NOUNS.len(),
            action in 0..DEFAULT_ACTIONS.len(),
            adjective in 0..DEFAULT_ADJECTIVES.len(),
        ) {
            let name = format!(
                "{}-{}-{}",
                DEFAULT_NOUNS[noun], DEFAULT_ACTIONS[action], DEFAULT_ADJECTIVES[adjective]
            );
            prop_assert!(is_generated_identifier(&name));
        }
    }
}
