//! Substring heuristics over the model's free-text analysis.
//!
//! There is no schema contract with the upstream model; these functions are
//! best-effort scrapes of the section headings the prompt asks for. Every
//! marker miss degrades to an empty value rather than an error.

/// Extracts the 0-100 score: the first run of digits between the literal
/// token "Score" and the following newline.
///
/// `None` when the token is absent or no digits follow it on that line
/// (callers default the score to 0).
pub fn extract_score(analysis: &str) -> Option<u32> {
    let after = analysis.split_once("Score")?.1;
    let line = after.lines().next().unwrap_or("");
    let run: String = line
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    run.parse().ok()
}

/// Extracts the strengths list: lines starting with `-` in the span after
/// "Strengths:" and before "Weaknesses:" (to end of text when the closing
/// marker is absent). Empty when the opening marker is absent.
pub fn extract_skills(analysis: &str) -> Vec<String> {
    let Some((_, after)) = analysis.split_once("Strengths:") else {
        return Vec::new();
    };
    let span = after
        .split_once("Weaknesses:")
        .map(|(before, _)| before)
        .unwrap_or(after);

    span.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .map(|line| line[1..].trim_start().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Extracts the verdict: text after the first "Final Verdict" with the
/// separator trimmed, or the last blank-line-delimited paragraph as fallback.
pub fn extract_verdict(analysis: &str) -> String {
    if let Some((_, after)) = analysis.split_once("Final Verdict") {
        return after
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim_end()
            .to_string();
    }
    analysis
        .rsplit("\n\n")
        .next()
        .unwrap_or(analysis)
        .trim()
        .to_string()
}
