use wordlens_core::types::{AnalysisReport, WordAnalysis};

/// Format a full analysis report as Markdown.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Wordlens - Word Analysis\n\n");

    out.push_str("## Words\n\n");
    out.push_str("| Word | Chars | Vowels | Consonants | Skipped | Palindrome |\n");
    out.push_str("|------|-------|--------|------------|---------|------------|\n");
    for analysis in &report.words {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            analysis.word,
            analysis.length,
            analysis.vowels,
            analysis.consonants,
            analysis.skipped,
            if analysis.palindrome { "yes" } else { "no" },
        ));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\n## Summary\n\n- **Words:** {}\n- **Vowels:** {}\n- **Consonants:** {}\n- **Palindromes:** {}\n",
        summary.word_count,
        summary.total_vowels,
        summary.total_consonants,
        summary.palindrome_count,
    ));

    out
}

/// Format a palindrome check as Markdown. Returns (markdown, passed).
pub fn format_check(analysis: &WordAnalysis) -> (String, bool) {
    let passed = analysis.palindrome;

    let mut out = format!(
        "# Wordlens - Palindrome Check\n\n- **Word:** {}\n- **Chars:** {}\n\n",
        analysis.word, analysis.length,
    );

    if passed {
        out.push_str("## Result\n\n**CHECK PASSED**: the word is a palindrome\n");
    } else {
        out.push_str("## Result\n\n**CHECK FAILED**: the word is not a palindrome\n");
    }

    (out, passed)
}
