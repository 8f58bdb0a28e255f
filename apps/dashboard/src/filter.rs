//! Candidate filtering — recomputed in full on every parameter change.

use crate::candidate::Candidate;

/// Filtering parameters chosen in the dashboard.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub min_score: u32,
    pub required_skills: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_score: 50,
            required_skills: Vec::new(),
        }
    }
}

/// Applies the criteria to every candidate, resetting and recomputing the
/// filtered-out flag and reason. Returns the number of qualified candidates.
///
/// A candidate is filtered out when its score is below the minimum, or when
/// any required skill has no case-insensitive substring match among the
/// candidate's extracted skills.
pub fn apply_filters(candidates: &mut [Candidate], criteria: &FilterCriteria) -> usize {
    for candidate in candidates.iter_mut() {
        candidate.filtered_out = false;
        candidate.filter_reason.clear();

        if candidate.score < criteria.min_score {
            candidate.filtered_out = true;
            candidate.filter_reason = format!(
                "Score below minimum ({} < {})",
                candidate.score, criteria.min_score
            );
            continue;
        }

        if criteria.required_skills.is_empty() {
            continue;
        }

        let candidate_skills_lower: Vec<String> =
            candidate.skills.iter().map(|s| s.to_lowercase()).collect();

        let missing: Vec<&str> = criteria
            .required_skills
            .iter()
            .filter(|required| {
                let required_lower = required.to_lowercase();
                !candidate_skills_lower
                    .iter()
                    .any(|skill| skill.contains(&required_lower))
            })
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            candidate.filtered_out = true;
            candidate.filter_reason = format!("Missing required skills: {}", missing.join(", "));
        }
    }

    candidates.iter().filter(|c| !c.filtered_out).count()
}
