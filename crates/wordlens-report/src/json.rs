use serde::Serialize;

use wordlens_core::types::{AnalysisReport, WordAnalysis};

/// Format a full analysis report as JSON.
pub fn format_report(report: &AnalysisReport, compact: bool) -> String {
    if compact {
        serde_json::to_string(report).expect("AnalysisReport should be serializable")
    } else {
        serde_json::to_string_pretty(report).expect("AnalysisReport should be serializable")
    }
}

/// Wrapper for check output that adds pass/fail metadata.
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    #[serde(flatten)]
    pub analysis: &'a WordAnalysis,
    pub check: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub passed: bool,
}

/// Format a palindrome check as JSON. Returns (json_string, passed).
pub fn format_check(analysis: &WordAnalysis, compact: bool) -> (String, bool) {
    let passed = analysis.palindrome;

    let output = CheckOutput {
        analysis,
        check: CheckStatus { passed },
    };

    let json = if compact {
        serde_json::to_string(&output).expect("CheckOutput should be serializable")
    } else {
        serde_json::to_string_pretty(&output).expect("CheckOutput should be serializable")
    };

    (json, passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlens_core::analyze::build_report;
    use wordlens_core::classify::LetterClassifier;

    fn sample_report(words: &[&str]) -> AnalysisReport {
        build_report(&LetterClassifier::default(), words)
    }

    #[test]
    fn test_format_report_valid_json() {
        let report = sample_report(&["Use-case", "Salas"]);
        let json = format_report(&report, false);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");

        assert_eq!(parsed["words"][0]["word"], "Use-case");
        assert_eq!(parsed["words"][0]["vowels"], 4);
        assert_eq!(parsed["words"][0]["consonants"], 3);
        assert_eq!(parsed["summary"]["word_count"], 2);
        assert_eq!(parsed["summary"]["palindrome_count"], 1);
    }

    #[test]
    fn test_format_report_compact_is_single_line() {
        let report = sample_report(&["Salas"]);
        let json = format_report(&report, true);
        assert!(!json.contains('\n'), "compact JSON should be single line");
        let _: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
    }

    #[test]
    fn test_format_report_pretty_is_multiline() {
        let report = sample_report(&["Salas"]);
        let json = format_report(&report, false);
        assert!(json.contains('\n'), "pretty JSON should be multiline");
    }

    #[test]
    fn test_format_check_passed() {
        let report = sample_report(&["alanala"]);
        let (json, passed) = format_check(&report.words[0], false);
        assert!(passed);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert_eq!(parsed["check"]["passed"], true);
    }

    #[test]
    fn test_format_check_failed() {
        let report = sample_report(&["Shalas"]);
        let (json, passed) = format_check(&report.words[0], false);
        assert!(!passed);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert_eq!(parsed["check"]["passed"], false);
    }

    #[test]
    fn test_check_flattened_fields() {
        let report = sample_report(&["Shalas"]);
        let (json, _) = format_check(&report.words[0], false);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        // Flattened WordAnalysis fields should be at top level
        assert!(parsed.get("word").is_some());
        assert!(parsed.get("vowels").is_some());
        assert!(parsed.get("palindrome").is_some());
        assert!(parsed.get("check").is_some());
    }
}
