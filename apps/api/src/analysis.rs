//! Resume analysis — builds the prompt, calls the model, and owns the
//! fallback and degraded-output behavior.
//!
//! Flow: build prompt → primary model call → (on failure) one fallback-model
//! call → (on failure) canned error analysis returned as the response body.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::build_analysis_prompt;
use crate::llm_client::{GeminiClient, LlmError, FALLBACK_MODEL, MODEL};

/// Analyzes a resume against a job description, returning the model's raw
/// free-text analysis.
///
/// Exactly one call against the primary model, then exactly one against the
/// fallback model if the first fails. When both fail, the error is embedded
/// in a canned analysis body instead of a 5xx: the dashboard scrapes it to a
/// zero score and keeps the candidate visible.
pub async fn analyze_resume(
    llm: &GeminiClient,
    resume_text: &str,
    job_description: &str,
) -> Result<String, AppError> {
    if !llm.has_api_key() {
        return Err(AppError::Validation(
            "Invalid API key. Please configure a valid API key in the .env file.".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(job_description, resume_text);

    info!("Sending analysis request to {MODEL}");
    let primary_err = match llm.generate(MODEL, &prompt).await {
        Ok(text) => return Ok(text),
        Err(e) => e,
    };

    warn!("Primary model failed ({primary_err}), attempting fallback model {FALLBACK_MODEL}");
    match llm.generate(FALLBACK_MODEL, &prompt).await {
        Ok(text) => {
            info!("Fallback model succeeded");
            Ok(text)
        }
        Err(fallback_err) => {
            warn!("Fallback model also failed: {fallback_err}");
            Ok(error_analysis(&primary_err))
        }
    }
}

/// Canned analysis body returned when both model calls fail. Keeps the
/// section headings the dashboard scrapes, with a zero score.
fn error_analysis(err: &LlmError) -> String {
    format!(
        "Analysis Error:\n\n\
         There was an error processing this resume. The error was:\n\
         {err}\n\n\
         Score: 0\n\
         Strengths: Unable to determine due to API error\n\
         Weaknesses: Unable to determine due to API error\n\
         Final Verdict: Please try again or contact support with error details."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_analysis_scrapes_to_zero_score() {
        let body = error_analysis(&LlmError::EmptyContent);
        assert!(body.contains("Score: 0"));
        assert!(body.contains("Final Verdict:"));
        assert!(body.contains("Analysis Error"));
    }

    #[test]
    fn test_error_analysis_embeds_cause() {
        let body = error_analysis(&LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        });
        assert!(body.contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_validation_error() {
        let llm = GeminiClient::new(None);
        let err = analyze_resume(&llm, "resume text", "job description")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
