use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::extract::extract_pdf_text;
use crate::analysis::normalize::normalize;
use crate::analysis::report::format_report;
use crate::analysis::roles::{RoleKey, RoleProfile};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_role: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub job_role: String,
    pub role_key: RoleKey,
    pub score: u32,
    pub found_major: Vec<String>,
    pub found_minor: Vec<String>,
    pub missing_skills: Vec<String>,
    pub backend: &'static str,
    pub report: String,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let response = run_analysis(&state, &req.job_role, &req.resume_text).await?;
    Ok(Json(response))
}

/// POST /api/v1/analyze/upload
///
/// Multipart: a `file` part holding a PDF and a `job_role` text part.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut job_role = String::new();
    let mut pdf_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        match field.name() {
            Some("job_role") => {
                job_role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job_role field: {e}")))?;
            }
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file field: {e}")))?;
                pdf_bytes = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("Attach a PDF resume as the 'file' part".to_string()))?;
    let resume_text = extract_pdf_text(&pdf_bytes)?;

    let response = run_analysis(&state, &job_role, &resume_text).await?;
    Ok(Json(response))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.catalog.profiles.clone())
}

/// Shared analysis path for both entry points. Missing input is rejected
/// here, before the resolver or the scoring strategy ever run.
async fn run_analysis(
    state: &AppState,
    job_role: &str,
    resume_text: &str,
) -> Result<AnalyzeResponse, AppError> {
    let job_role = job_role.trim();
    if job_role.is_empty() {
        return Err(AppError::Validation(
            "Enter a job role before analyzing".to_string(),
        ));
    }

    let resume = normalize(resume_text);
    if resume.is_empty() {
        return Err(AppError::Validation(
            "Upload or paste resume text before analyzing".to_string(),
        ));
    }

    let role_key = state.catalog.resolve(job_role);
    let result = state.analyzer.analyze(&resume, role_key).await?;
    let report = format_report(&result, job_role);

    info!(
        role = role_key.as_str(),
        score = result.rounded_score(),
        backend = state.analyzer.backend(),
        "Resume analyzed"
    );

    Ok(AnalyzeResponse {
        job_role: job_role.to_string(),
        role_key,
        score: result.rounded_score(),
        found_major: result.found_major,
        found_minor: result.found_minor,
        missing_skills: result.missing_skills,
        backend: state.analyzer.backend(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::roles::RoleCatalog;
    use crate::analysis::strategy::DeterministicAnalyzer;
    use crate::config::Config;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let catalog = Arc::new(RoleCatalog::builtin());
        AppState {
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
                role_catalog_path: None,
                enable_llm_scoring: false,
                anthropic_api_key: None,
            },
            catalog: catalog.clone(),
            analyzer: Arc::new(DeterministicAnalyzer::new(catalog)),
        }
    }

    #[tokio::test]
    async fn test_empty_role_is_rejected_before_scoring() {
        let err = run_analysis(&test_state(), "", "some text").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_resume_is_rejected_before_scoring() {
        let err = run_analysis(&test_state(), "Node Developer", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_whitespace_only_resume_is_rejected() {
        let err = run_analysis(&test_state(), "Web Developer", "  \n \t ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_react_developer_end_to_end() {
        let response = run_analysis(
            &test_state(),
            "React Developer",
            "Experienced React developer with JavaScript, HTML and CSS skills. Github: ...",
        )
        .await
        .unwrap();

        assert_eq!(response.role_key, RoleKey::ReactDeveloper);
        assert_eq!(response.score, 90);
        assert!(response.missing_skills.is_empty());
        assert!(response.report.contains("Skill Match: 90%"));
        assert_eq!(response.backend, "deterministic");
    }

    #[tokio::test]
    async fn test_unknown_role_silently_falls_back_to_default() {
        let response = run_analysis(&test_state(), "Underwater Basket Weaver", "html and css")
            .await
            .unwrap();
        assert_eq!(response.role_key, RoleKey::WebDeveloper);
    }

    #[tokio::test]
    async fn test_display_role_echoes_user_input_not_key() {
        let response = run_analysis(&test_state(), "  REACT developer ", "react html css javascript")
            .await
            .unwrap();
        assert_eq!(response.job_role, "REACT developer");
        assert!(response.report.contains("REACT developer"));
    }
}
