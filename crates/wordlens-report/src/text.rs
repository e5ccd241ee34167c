use colored::Colorize;

use wordlens_core::types::{AnalysisReport, WordAnalysis};

/// Format a full analysis report for terminal output.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{}\n", "Wordlens - Word Analysis".bold()));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    for analysis in &report.words {
        out.push_str(&format_word_line(analysis));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\n{}: {} word(s), {} vowels, {} consonants, {} palindrome(s)\n",
        "Summary".bold(),
        summary.word_count,
        summary.total_vowels,
        summary.total_consonants,
        summary.palindrome_count,
    ));

    out
}

fn format_word_line(analysis: &WordAnalysis) -> String {
    let verdict = if analysis.palindrome {
        "palindrome".green().bold().to_string()
    } else {
        "not a palindrome".dimmed().to_string()
    };

    let skipped = if analysis.skipped > 0 {
        format!(", {} skipped", analysis.skipped)
    } else {
        String::new()
    };

    format!(
        "  {}: {} chars, {} vowels, {} consonants{}  [{}]\n",
        analysis.word.bold(),
        analysis.length,
        analysis.vowels,
        analysis.consonants,
        skipped,
        verdict,
    )
}

/// Format a palindrome check for CI use. Returns (text, passed).
pub fn format_check(analysis: &WordAnalysis) -> (String, bool) {
    let passed = analysis.palindrome;

    let mut out = format!("{}\n", format_word_line(analysis).trim_end());
    if passed {
        out.push_str(&format!(
            "{}: '{}' is a palindrome\n",
            "CHECK PASSED".green().bold(),
            analysis.word,
        ));
    } else {
        out.push_str(&format!(
            "{}: '{}' is not a palindrome\n",
            "CHECK FAILED".red().bold(),
            analysis.word,
        ));
    }

    (out, passed)
}
