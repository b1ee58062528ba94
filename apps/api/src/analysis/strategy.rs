//! Resume analysis strategies — pluggable, trait-based producers of
//! `AnalysisResult`.
//!
//! Default: `DeterministicAnalyzer` (pure-Rust, reproducible, error-free).
//! Optional: `LlmAnalyzer` (semantic via Claude), enabled with
//! `ENABLE_LLM_SCORING`. The two strategies share one output contract but
//! deliberately not one failure model: the deterministic engine cannot fail,
//! the LLM path surfaces network/parse/rate-limit errors as `AppError::Llm`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::analysis::engine::{self, AnalysisResult};
use crate::analysis::normalize::NormalizedResume;
use crate::analysis::roles::{RoleCatalog, RoleKey};
use crate::errors::AppError;
use crate::llm_client::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::llm_client::LlmClient;

/// The analyzer trait. Implement this to swap scoring backends without
/// touching handlers. Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume: &NormalizedResume,
        role: RoleKey,
    ) -> Result<AnalysisResult, AppError>;

    /// Backend label surfaced in responses for transparency.
    fn backend(&self) -> &'static str;
}

/// Default strategy: the deterministic scoring engine over the injected
/// role catalog. Same inputs always produce the same result.
pub struct DeterministicAnalyzer {
    catalog: Arc<RoleCatalog>,
}

impl DeterministicAnalyzer {
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ResumeAnalyzer for DeterministicAnalyzer {
    async fn analyze(
        &self,
        resume: &NormalizedResume,
        role: RoleKey,
    ) -> Result<AnalysisResult, AppError> {
        Ok(engine::score(&resume.matching, self.catalog.profile(role)))
    }

    fn backend(&self) -> &'static str {
        "deterministic"
    }
}

/// Semantic strategy: asks Claude for a structured assessment against the
/// same role taxonomy. Non-reproducible; kept strictly outside the engine.
pub struct LlmAnalyzer {
    llm: LlmClient,
    catalog: Arc<RoleCatalog>,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient, catalog: Arc<RoleCatalog>) -> Self {
        Self { llm, catalog }
    }
}

/// JSON shape the LLM is instructed to return.
#[derive(Debug, Deserialize)]
struct LlmAssessment {
    found_major: Vec<String>,
    found_minor: Vec<String>,
    #[serde(default)]
    missing_skills: Vec<String>,
    score: f64,
}

#[async_trait]
impl ResumeAnalyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        resume: &NormalizedResume,
        role: RoleKey,
    ) -> Result<AnalysisResult, AppError> {
        let profile = self.catalog.profile(role);
        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{role}", role.as_str())
            .replace("{major}", &profile.major.join(", "))
            .replace("{minor}", &profile.minor.join(", "))
            .replace("{resume_text}", &resume.text);

        let assessment: LlmAssessment = self
            .llm
            .call_json(&prompt, ANALYZE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume assessment failed: {e}")))?;

        Ok(AnalysisResult {
            role,
            found_major: assessment.found_major,
            found_minor: assessment.found_minor,
            missing_skills: if profile.suppress_missing {
                Vec::new()
            } else {
                assessment.missing_skills
            },
            // Never trust the model to stay in range.
            score: assessment.score.clamp(0.0, 100.0),
        })
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}
