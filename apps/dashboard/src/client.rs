//! HTTP client for the analysis API.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot connect to backend: {0}")]
    Connect(reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },
}

/// Health payload returned by `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    #[serde(default)]
    pub model_in_use: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub api_key_configured: bool,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the analysis API. One request per uploaded file, strictly
/// sequential — the caller drives the loop.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(180))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// GET /health — used at startup to surface configuration problems early.
    pub async fn health(&self) -> Result<HealthInfo, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(ClientError::Connect)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    /// POST /analyze — uploads one resume PDF with the job description and
    /// returns the raw analysis text.
    pub async fn analyze(
        &self,
        resume_path: &Path,
        job_description: &str,
    ) -> Result<String, ClientError> {
        let bytes = tokio::fs::read(resume_path)
            .await
            .map_err(|source| ClientError::File {
                path: resume_path.display().to_string(),
                source,
            })?;

        let filename = resume_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(bytes)
                    .file_name(filename)
                    .mime_str("application/pdf")?,
            )
            .text("job_description", job_description.to_string());

        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|e| e.error)
                .unwrap_or_else(|_| "Unknown error occurred".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<AnalyzeResponse>().await?.analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_info_tolerates_missing_fields() {
        let info: HealthInfo = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert_eq!(info.status, "healthy");
        assert!(info.model_in_use.is_none());
        assert!(!info.api_key_configured);
    }

    #[test]
    fn test_health_info_full_payload() {
        let json = r#"{
            "status": "healthy",
            "service": "hiring-agent-api",
            "version": "0.1.0",
            "model_in_use": "gemini-1.5-pro",
            "fallback_model": "gemini-pro",
            "api_version": "v1",
            "api_key_configured": true
        }"#;
        let info: HealthInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.model_in_use.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(info.api_version.as_deref(), Some("v1"));
        assert!(info.api_key_configured);
    }

    #[test]
    fn test_error_payload_parses() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"error": "Could not extract text from the PDF"}"#).unwrap();
        assert_eq!(err.error, "Could not extract text from the PDF");
    }

    #[tokio::test]
    async fn test_analyze_missing_file_is_file_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client
            .analyze(Path::new("/nonexistent/resume.pdf"), "jd")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::File { .. }));
    }
}
