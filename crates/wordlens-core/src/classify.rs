use crate::config::LettersConfig;
use crate::types::{LetterClass, LetterCounts};

/// The vowel set of the default configuration, lowercase.
pub const DEFAULT_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Classifies characters into vowels, consonants, and everything else.
///
/// The vowel set is fixed at construction; the consonant set is implicit:
/// every ASCII letter outside the vowel set. Non-ASCII letters fall outside
/// both sets — accented characters are a documented limitation, not an error.
pub struct LetterClassifier {
    vowels: Vec<char>,
}

impl Default for LetterClassifier {
    fn default() -> Self {
        Self {
            vowels: DEFAULT_VOWELS.to_vec(),
        }
    }
}

impl LetterClassifier {
    pub fn new(config: &LettersConfig) -> Self {
        // Entries are validated at config load; anything that still isn't a
        // single ASCII letter is ignored here rather than failing the run.
        let vowels = config
            .vowels
            .iter()
            .filter_map(|entry| {
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                    _ => None,
                }
            })
            .collect();
        Self { vowels }
    }

    /// Classify a single character, case-insensitively.
    pub fn classify(&self, c: char) -> LetterClass {
        let lower = c.to_ascii_lowercase();
        if self.vowels.contains(&lower) {
            LetterClass::Vowel
        } else if lower.is_ascii_alphabetic() {
            LetterClass::Consonant
        } else {
            LetterClass::Other
        }
    }

    /// Count vowels and consonants in a word. Characters matching neither
    /// set are silently skipped.
    pub fn count_letters(&self, word: &str) -> LetterCounts {
        let mut counts = LetterCounts::default();
        for c in word.chars() {
            counts.record(self.classify(c));
        }
        counts
    }
}
