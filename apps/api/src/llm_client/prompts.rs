// Prompt constants for the analysis pipeline.
//
// The response is parsed downstream by substring heuristics, so the section
// headings requested here ("Score", "Strengths", "Weaknesses",
// "Final Verdict") are load-bearing.

/// Analysis prompt template. Replace `{job_description}` and `{resume_text}`
/// before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume for the job description.
Provide:
- Score (0-100)
- Strengths
- Weaknesses
- Final Verdict

Job Description:
{job_description}

Resume:
{resume_text}"#;

/// Builds the analysis prompt for one resume.
pub fn build_analysis_prompt(job_description: &str, resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_inputs() {
        let prompt = build_analysis_prompt("Rust engineer, 5+ years", "Jane Doe, Rust since 2018");
        assert!(prompt.contains("Rust engineer, 5+ years"));
        assert!(prompt.contains("Jane Doe, Rust since 2018"));
    }

    #[test]
    fn test_prompt_requests_scraped_headings() {
        let prompt = build_analysis_prompt("jd", "resume");
        assert!(prompt.contains("Score (0-100)"));
        assert!(prompt.contains("Strengths"));
        assert!(prompt.contains("Weaknesses"));
        assert!(prompt.contains("Final Verdict"));
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        let prompt = build_analysis_prompt("jd", "resume");
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
