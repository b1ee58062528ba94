//! Scoring Engine — weighted skill-presence scoring with a capped
//! missing-skill deduction and fixed bonus signals.
//!
//! Pure function of (matching string, role profile): no I/O, no clock, no
//! randomness. Reproducibility is a correctness requirement here; anything
//! non-deterministic (the LLM strategy) lives behind `ResumeAnalyzer` instead.

use serde::Serialize;

use crate::analysis::roles::{RoleKey, RoleProfile};

/// Major skills carry 80% of the base score, minor skills 20%.
pub const MAJOR_WEIGHT: f64 = 80.0;
pub const MINOR_WEIGHT: f64 = 20.0;

/// A candidate can lose at most 70% of their base score to missing skills.
pub const DEDUCTION_CAP: f64 = 0.7;

/// Each bonus signal found in the résumé adds a flat +5.
pub const BONUS_INCREMENT: f64 = 5.0;
pub const BONUS_SIGNALS: &[&str] = &["project", "experience", "github"];

/// One analysis outcome. Built fresh per call, never mutated afterwards;
/// consumed by the report formatter.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub role: RoleKey,
    pub found_major: Vec<String>,
    pub found_minor: Vec<String>,
    /// Unordered set semantics; empty when the role suppresses reporting.
    pub missing_skills: Vec<String>,
    /// Clamped to [0, 100].
    pub score: f64,
}

impl AnalysisResult {
    pub fn rounded_score(&self) -> u32 {
        self.score.round() as u32
    }
}

/// Scores a normalized résumé matching string against one role profile.
///
/// An empty skill bucket contributes zero to the base score rather than
/// dividing by zero, so a misconfigured catalog degrades instead of crashing.
pub fn score(matching: &str, profile: &RoleProfile) -> AnalysisResult {
    let found_major = present_tokens(matching, &profile.major);
    let found_minor = present_tokens(matching, &profile.minor);

    let missing_skills = if profile.suppress_missing {
        Vec::new()
    } else {
        profile
            .major
            .iter()
            .chain(&profile.minor)
            .filter(|t| !found_major.contains(*t) && !found_minor.contains(*t))
            .cloned()
            .collect()
    };

    let base_score = bucket_score(found_major.len(), profile.major.len(), MAJOR_WEIGHT)
        + bucket_score(found_minor.len(), profile.minor.len(), MINOR_WEIGHT);

    let total_skills = profile.major.len() + profile.minor.len();
    let deduction = if total_skills == 0 {
        0.0
    } else {
        let proportional = base_score * missing_skills.len() as f64 / total_skills as f64;
        proportional.min(DEDUCTION_CAP * base_score)
    };

    let bonuses = BONUS_SIGNALS
        .iter()
        .filter(|signal| matching.contains(*signal))
        .count() as f64
        * BONUS_INCREMENT;

    let score = (base_score - deduction + bonuses).clamp(0.0, 100.0);

    AnalysisResult {
        role: profile.role,
        found_major,
        found_minor,
        missing_skills,
        score,
    }
}

fn present_tokens(matching: &str, tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| matching.contains(t.as_str()))
        .cloned()
        .collect()
}

fn bucket_score(found: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    found as f64 / total as f64 * weight
}
