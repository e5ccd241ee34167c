use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single character against the letter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterClass {
    Vowel,
    Consonant,
    /// Digits, punctuation, whitespace, and non-ASCII letters. Counted in
    /// neither set.
    Other,
}

impl fmt::Display for LetterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterClass::Vowel => write!(f, "vowel"),
            LetterClass::Consonant => write!(f, "consonant"),
            LetterClass::Other => write!(f, "other"),
        }
    }
}

/// Vowel and consonant totals for a word.
///
/// Invariant: `vowels + consonants` never exceeds the number of characters
/// in the word that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterCounts {
    pub fn record(&mut self, class: LetterClass) {
        match class {
            LetterClass::Vowel => self.vowels += 1,
            LetterClass::Consonant => self.consonants += 1,
            LetterClass::Other => {}
        }
    }

    /// Total characters that matched either set.
    pub fn letters(&self) -> usize {
        self.vowels + self.consonants
    }
}

/// Full analysis of a single word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    /// Character count, not byte length.
    pub length: usize,
    pub vowels: usize,
    pub consonants: usize,
    /// Characters outside both letter sets.
    pub skipped: usize,
    pub palindrome: bool,
}

/// Aggregate totals over one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub word_count: usize,
    pub total_vowels: usize,
    pub total_consonants: usize,
    pub palindrome_count: usize,
}

/// The unit that report renderers consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub words: Vec<WordAnalysis>,
    pub summary: BatchSummary,
}

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow::anyhow!("unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_counts_record() {
        let mut counts = LetterCounts::default();
        counts.record(LetterClass::Vowel);
        counts.record(LetterClass::Consonant);
        counts.record(LetterClass::Consonant);
        counts.record(LetterClass::Other);

        assert_eq!(counts.vowels, 1);
        assert_eq!(counts.consonants, 2);
        assert_eq!(counts.letters(), 3);
    }

    #[test]
    fn test_letter_class_display() {
        assert_eq!(LetterClass::Vowel.to_string(), "vowel");
        assert_eq!(LetterClass::Consonant.to_string(), "consonant");
        assert_eq!(LetterClass::Other.to_string(), "other");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
