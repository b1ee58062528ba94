//! Feedback Formatter — renders an `AnalysisResult` as report text.
//!
//! Pure formatting; every number here was decided by the scoring strategy.

use crate::analysis::engine::AnalysisResult;

/// Shown under Strengths when no skill matched at all.
const EMPTY_STRENGTHS_FALLBACK: &str = "Basic Web Skills";

pub fn format_report(result: &AnalysisResult, display_role: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("Resume Analysis — {display_role}\n"));
    out.push_str(&format!("Skill Match: {}%\n", result.rounded_score()));

    out.push_str("\nStrengths:\n");
    let strengths: Vec<&str> = result
        .found_major
        .iter()
        .chain(&result.found_minor)
        .map(String::as_str)
        .collect();
    if strengths.is_empty() {
        out.push_str(&format!("- {EMPTY_STRENGTHS_FALLBACK}\n"));
    } else {
        for skill in strengths {
            out.push_str(&format!("- {skill}\n"));
        }
    }

    out.push_str("\nMissing Skills:\n");
    if result.missing_skills.is_empty() {
        out.push_str("- None\n");
    } else {
        for skill in &result.missing_skills {
            out.push_str(&format!("- {skill}\n"));
        }
    }

    out.push_str("\nImprovement Tips:\n");
    out.push_str(&format!(
        "- Highlight hands-on projects that match a {display_role} position.\n"
    ));
    out.push_str("- Quantify outcomes (performance gains, users served, time saved).\n");
    out.push_str("- Link a GitHub profile or portfolio so reviewers can verify your work.\n");
    out.push_str(&format!(
        "- Mirror the wording of {display_role} job listings for the skills you already have.\n"
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::roles::RoleKey;

    fn result(found_major: &[&str], missing: &[&str], score: f64) -> AnalysisResult {
        AnalysisResult {
            role: RoleKey::WebDeveloper,
            found_major: found_major.iter().map(|s| s.to_string()).collect(),
            found_minor: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            score,
        }
    }

    #[test]
    fn test_report_echoes_role_and_rounded_score() {
        let report = format_report(&result(&["html"], &[], 76.4), "Web Developer");
        assert!(report.contains("Web Developer"));
        assert!(report.contains("Skill Match: 76%"));
    }

    #[test]
    fn test_report_lists_found_skills() {
        let report = format_report(&result(&["html", "css"], &["javascript"], 50.0), "Web Developer");
        assert!(report.contains("- html"));
        assert!(report.contains("- css"));
        assert!(report.contains("- javascript"));
    }

    #[test]
    fn test_empty_strengths_fall_back_to_basic_web_skills() {
        let report = format_report(&result(&[], &["html"], 5.0), "Web Developer");
        assert!(report.contains("- Basic Web Skills"));
    }

    #[test]
    fn test_empty_missing_renders_none() {
        let report = format_report(&result(&["react"], &[], 90.0), "React Developer");
        assert!(report.contains("Missing Skills:\n- None"));
    }

    #[test]
    fn test_tips_are_personalized_with_display_role() {
        let report = format_report(&result(&[], &[], 0.0), "Angular Developer");
        assert!(report.contains("a Angular Developer position"));
        assert!(report.contains("Improvement Tips:"));
    }

    #[test]
    fn test_score_rounds_half_up() {
        let report = format_report(&result(&[], &[], 89.5), "Web Developer");
        assert!(report.contains("Skill Match: 90%"));
    }
}
