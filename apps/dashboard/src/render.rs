//! Terminal rendering for candidate views.

use crate::candidate::Candidate;

/// Width of the comparison chart bars, in characters.
const BAR_WIDTH: usize = 40;

/// Score banding shared by every view: high ≥ 70, medium ≥ 40, low below.
pub fn score_band(score: u32) -> &'static str {
    if score >= 70 {
        "HIGH"
    } else if score >= 40 {
        "MEDIUM"
    } else {
        "LOW"
    }
}

/// A fixed-width horizontal bar for the comparison chart.
pub fn score_bar(score: u32, width: usize) -> String {
    let filled = (score.min(100) as usize) * width / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Up to the first three skills, comma-joined.
pub fn top_skills(candidate: &Candidate) -> String {
    if candidate.skills.is_empty() {
        return "None identified".to_string();
    }
    candidate
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One summary card per candidate, used by the qualified and top-N views.
pub fn print_candidate_card(candidate: &Candidate) {
    println!(
        "  {}  [{}% {}]",
        candidate.name,
        candidate.score,
        score_band(candidate.score)
    );
    println!("    Top skills: {}", top_skills(candidate));
    if candidate.filtered_out {
        println!("    Filtered out: {}", candidate.filter_reason);
    } else if !candidate.verdict.is_empty() {
        println!("    Verdict: {}", truncate(&candidate.verdict, 100));
    }
}

/// Tabular view over all candidates, optionally hiding filtered-out rows.
pub fn print_candidate_table(candidates: &[&Candidate], show_filtered: bool) {
    println!(
        "  {:<24} {:>5}  {:<8} {}",
        "Name", "Score", "Band", "Status"
    );
    for candidate in candidates {
        if candidate.filtered_out && !show_filtered {
            continue;
        }
        let status = if candidate.filtered_out {
            candidate.filter_reason.as_str()
        } else {
            "qualified"
        };
        println!(
            "  {:<24} {:>5}  {:<8} {}",
            truncate(&candidate.name, 24),
            candidate.score,
            score_band(candidate.score),
            status
        );
    }
}

/// Comparison chart: one bar per candidate, highest score first.
pub fn print_comparison(candidates: &[&Candidate]) {
    let name_width = candidates
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);
    for candidate in candidates {
        println!(
            "  {:<width$} {} {:>3}%",
            truncate(&candidate.name, 24),
            score_bar(candidate.score, BAR_WIDTH),
            candidate.score,
            width = name_width
        );
    }
}

/// Full detail view for one candidate.
pub fn print_candidate_detail(candidate: &Candidate, required_skills: &[String]) {
    println!(
        "\n{} — {}% ({})",
        candidate.name,
        candidate.score,
        score_band(candidate.score)
    );
    println!("Analyzed at: {}", candidate.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC"));
    if candidate.filtered_out {
        println!("Filtered out: {}", candidate.filter_reason);
    }

    println!("\nSkills:");
    if candidate.skills.is_empty() {
        println!("  No specific skills identified");
    }
    for skill in &candidate.skills {
        let is_required = required_skills
            .iter()
            .any(|required| skill.to_lowercase().contains(&required.to_lowercase()));
        if is_required {
            println!("  * {skill} (required)");
        } else {
            println!("  * {skill}");
        }
    }

    println!("\nVerdict: {}", candidate.verdict);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate(name: &str, score: u32, skills: Vec<&str>) -> Candidate {
        let mut candidate =
            Candidate::from_analysis(&format!("{name}.pdf"), format!("Score: {score}"));
        candidate.skills = skills.into_iter().map(String::from).collect();
        candidate
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(score_band(70), "HIGH");
        assert_eq!(score_band(69), "MEDIUM");
        assert_eq!(score_band(40), "MEDIUM");
        assert_eq!(score_band(39), "LOW");
        assert_eq!(score_band(0), "LOW");
    }

    #[test]
    fn test_score_bar_full_and_empty() {
        assert_eq!(score_bar(100, 10), "██████████");
        assert_eq!(score_bar(0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn test_score_bar_partial() {
        let bar = score_bar(50, 10);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_score_bar_clamps_overscaled_values() {
        // Heuristic scraping can yield > 100; the bar never overflows
        assert_eq!(score_bar(250, 10), "██████████");
    }

    #[test]
    fn test_top_skills_limits_to_three() {
        let candidate = make_candidate("a", 80, vec!["Rust", "SQL", "Go", "Python"]);
        assert_eq!(top_skills(&candidate), "Rust, SQL, Go");
    }

    #[test]
    fn test_top_skills_empty() {
        let candidate = make_candidate("a", 80, vec![]);
        assert_eq!(top_skills(&candidate), "None identified");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text_ellipsized() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }
}
