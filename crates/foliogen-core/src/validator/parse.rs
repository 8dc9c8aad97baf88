//! Parsers for type-checker and linter output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Diagnostic lists are capped to keep reports readable.
pub const MAX_DIAGNOSTICS: usize = 10;

/// Matches the trailing eslint summary, e.g.
/// `7 problems (2 errors, 5 warnings)`.
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+) problems? \((\d+) errors?, (\d+) warnings?\)").unwrap()
});

/// Extracts tsc error lines (`file.ts(1,2): error TS1234: ...`), capped at
/// [`MAX_DIAGNOSTICS`].
pub fn parse_typescript_errors(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("error TS") || line.contains(": error"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_DIAGNOSTICS)
        .map(str::to_string)
        .collect()
}

/// Extracts eslint error lines and the warning count. The per-line count
/// is a heuristic; a summary line, when present, is authoritative for the
/// warning total.
pub fn parse_eslint_output(output: &str) -> (Vec<String>, usize) {
    let mut errors = Vec::new();
    let mut warnings = 0usize;

    for line in output.lines() {
        // the summary line mentions both words; it is counted separately
        if SUMMARY_RE.is_match(line) {
            continue;
        }
        if line.contains("error") {
            let trimmed = line.trim();
            if !trimmed.is_empty() && errors.len() < MAX_DIAGNOSTICS {
                errors.push(trimmed.to_string());
            }
        }
        if line.contains("warning") {
            warnings += 1;
        }
    }

    if let Some(captures) = SUMMARY_RE.captures(output) {
        if let Some(count) = captures.get(3).and_then(|m| m.as_str().parse().ok()) {
            warnings = count;
        }
    }

    (errors, warnings)
}
