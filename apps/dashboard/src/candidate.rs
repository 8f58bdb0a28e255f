use chrono::{DateTime, Utc};

use crate::parse::{extract_score, extract_skills, extract_verdict};

/// One uploaded resume plus its derived evaluation fields.
///
/// Lives only in the dashboard session store; identity is the
/// filename-derived name.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    /// Raw analysis text from the model — opaque, no schema contract.
    pub analysis: String,
    /// 0-100; defaults to 0 when the heuristic finds nothing.
    pub score: u32,
    pub skills: Vec<String>,
    pub verdict: String,
    pub filtered_out: bool,
    pub filter_reason: String,
    pub analyzed_at: DateTime<Utc>,
}

impl Candidate {
    /// Builds a candidate from an uploaded filename and the raw analysis
    /// text. The name is the filename portion before the first `.`.
    pub fn from_analysis(filename: &str, analysis: String) -> Self {
        let name = filename.split('.').next().unwrap_or(filename).to_string();
        let score = extract_score(&analysis).unwrap_or(0);
        let skills = extract_skills(&analysis);
        let verdict = extract_verdict(&analysis);
        Self {
            name,
            analysis,
            score,
            skills,
            verdict,
            filtered_out: false,
            filter_reason: String::new(),
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_strips_extension() {
        let candidate = Candidate::from_analysis("alice_smith.pdf", "Score: 80".to_string());
        assert_eq!(candidate.name, "alice_smith");
    }

    #[test]
    fn test_name_takes_portion_before_first_dot() {
        let candidate = Candidate::from_analysis("cv.v2.pdf", "Score: 80".to_string());
        assert_eq!(candidate.name, "cv");
    }

    #[test]
    fn test_score_defaults_to_zero() {
        let candidate = Candidate::from_analysis("bob.pdf", "No usable sections.".to_string());
        assert_eq!(candidate.score, 0);
    }

    #[test]
    fn test_derived_fields_populated() {
        let analysis = "Score: 91\nStrengths:\n- Rust\nWeaknesses:\n- none\nFinal Verdict: Hire.";
        let candidate = Candidate::from_analysis("carol.pdf", analysis.to_string());
        assert_eq!(candidate.score, 91);
        assert_eq!(candidate.skills, vec!["Rust"]);
        assert_eq!(candidate.verdict, "Hire.");
        assert!(!candidate.filtered_out);
        assert!(candidate.filter_reason.is_empty());
    }
}
