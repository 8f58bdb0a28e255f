use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::analyze_resume;
use crate::errors::AppError;
use crate::extract::text_from_pdf;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /analyze
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
/// Returns `{"analysis": string}` on success; missing fields and
/// non-extractable PDFs are 400s with an `{"error": string}` body.
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut resume_filename = String::new();
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        // The field name borrows the field; copy it out before consuming the body
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                resume_filename = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation("Invalid resume file".to_string()))?;
                resume_bytes = Some(data);
            }
            "job_description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| AppError::Validation("Invalid job description".to_string()))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (resume_bytes, job_description) = match (resume_bytes, job_description) {
        (Some(resume), Some(jd)) if !jd.trim().is_empty() => (resume, jd),
        _ => {
            return Err(AppError::Validation(
                "Job description and resume are required".to_string(),
            ))
        }
    };

    info!(
        filename = %resume_filename,
        bytes = resume_bytes.len(),
        "Analyzing uploaded resume"
    );

    let resume_text = text_from_pdf(&resume_bytes)?;

    let analysis = analyze_resume(&state.llm, &resume_text, &job_description).await?;

    Ok(Json(AnalyzeResponse { analysis }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::GeminiClient;
    use crate::routes::build_router;
    use crate::state::AppState;

    const BOUNDARY: &str = "test-boundary-7d4a1b";

    fn test_app() -> axum::Router {
        let config = Config {
            google_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        build_router(AppState {
            llm: GeminiClient::new(None),
            config,
        })
    }

    /// Builds a multipart/form-data body. Each part is (name, filename, bytes).
    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, filename, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(filename) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: application/pdf\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_resume_is_400() {
        let response = test_app()
            .oneshot(analyze_request(&[(
                "job_description",
                None,
                b"Senior Rust Engineer",
            )]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Job description and resume are required");
    }

    #[tokio::test]
    async fn test_missing_job_description_is_400() {
        let response = test_app()
            .oneshot(analyze_request(&[(
                "resume",
                Some("alice.pdf"),
                b"%PDF-1.4 fake",
            )]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Job description and resume are required");
    }

    #[tokio::test]
    async fn test_blank_job_description_is_400() {
        let response = test_app()
            .oneshot(analyze_request(&[
                ("resume", Some("alice.pdf"), b"%PDF-1.4 fake"),
                ("job_description", None, b"   "),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_extractable_pdf_is_400() {
        let response = test_app()
            .oneshot(analyze_request(&[
                ("resume", Some("scan.pdf"), b"not a real pdf"),
                ("job_description", None, b"Senior Rust Engineer"),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Could not extract text"));
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        // Unknown fields alone still leave the required ones missing
        let response = test_app()
            .oneshot(analyze_request(&[("unrelated", None, b"data")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_model_info() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_in_use"], "gemini-1.5-pro");
        assert_eq!(body["fallback_model"], "gemini-pro");
        assert_eq!(body["api_key_configured"], false);
    }
}
