use crate::classify::LetterClassifier;
use crate::palindrome::is_palindrome;
use crate::types::{AnalysisReport, BatchSummary, WordAnalysis};

/// Analyze a single word: letter counts plus palindrome verdict.
pub fn analyze_word(classifier: &LetterClassifier, word: &str) -> WordAnalysis {
    let counts = classifier.count_letters(word);
    let length = word.chars().count();

    WordAnalysis {
        word: word.to_string(),
        length,
        vowels: counts.vowels,
        consonants: counts.consonants,
        skipped: length - counts.letters(),
        palindrome: is_palindrome(word),
    }
}

/// Analyze a batch of words into a report with aggregate totals.
pub fn build_report<S: AsRef<str>>(classifier: &LetterClassifier, words: &[S]) -> AnalysisReport {
    let words: Vec<WordAnalysis> = words
        .iter()
        .map(|w| analyze_word(classifier, w.as_ref()))
        .collect();

    let mut summary = BatchSummary {
        word_count: words.len(),
        ..BatchSummary::default()
    };
    for analysis in &words {
        summary.total_vowels += analysis.vowels;
        summary.total_consonants += analysis.consonants;
        if analysis.palindrome {
            summary.palindrome_count += 1;
        }
    }

    AnalysisReport { words, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_word_counts_and_verdict() {
        let classifier = LetterClassifier::default();
        let analysis = analyze_word(&classifier, "Use-case");

        assert_eq!(analysis.word, "Use-case");
        assert_eq!(analysis.length, 8);
        assert_eq!(analysis.vowels, 4);
        assert_eq!(analysis.consonants, 3);
        assert_eq!(analysis.skipped, 1);
        assert!(!analysis.palindrome);
    }

    #[test]
    fn test_analyze_word_palindrome() {
        let classifier = LetterClassifier::default();
        let analysis = analyze_word(&classifier, "Salas");
        assert!(analysis.palindrome);
    }

    #[test]
    fn test_analyze_empty_word() {
        let classifier = LetterClassifier::default();
        let analysis = analyze_word(&classifier, "");

        assert_eq!(analysis.length, 0);
        assert_eq!(analysis.vowels, 0);
        assert_eq!(analysis.consonants, 0);
        assert_eq!(analysis.skipped, 0);
        assert!(analysis.palindrome, "empty word is vacuously a palindrome");
    }

    #[test]
    fn test_analyze_non_ascii_length_in_chars() {
        let classifier = LetterClassifier::default();
        let analysis = analyze_word(&classifier, "héllo");

        assert_eq!(analysis.length, 5);
        // 'é' is outside both sets
        assert_eq!(analysis.vowels, 1);
        assert_eq!(analysis.consonants, 3);
        assert_eq!(analysis.skipped, 1);
    }

    #[test]
    fn test_build_report_summary() {
        let classifier = LetterClassifier::default();
        let report = build_report(&classifier, &["Salas", "Shalas", "alanala"]);

        assert_eq!(report.words.len(), 3);
        assert_eq!(report.summary.word_count, 3);
        assert_eq!(report.summary.palindrome_count, 2);
        assert_eq!(
            report.summary.total_vowels,
            report.words.iter().map(|w| w.vowels).sum::<usize>()
        );
        assert_eq!(
            report.summary.total_consonants,
            report.words.iter().map(|w| w.consonants).sum::<usize>()
        );
    }

    #[test]
    fn test_build_report_empty_batch() {
        let classifier = LetterClassifier::default();
        let report = build_report::<&str>(&classifier, &[]);

        assert!(report.words.is_empty());
        assert_eq!(report.summary, BatchSummary::default());
    }
}
