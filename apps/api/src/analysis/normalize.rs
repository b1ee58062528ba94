//! Text Normalizer — canonicalizes raw résumé text for substring matching.
//!
//! PDF extraction repeats headers and footers across pages, so dedup happens
//! at line level before the text is folded into a single matching string.

/// Normalized résumé text. `text` keeps the deduplicated lines readable;
/// `matching` is the case-folded form every skill lookup runs against.
#[derive(Debug, Clone)]
pub struct NormalizedResume {
    pub text: String,
    pub matching: String,
}

impl NormalizedResume {
    /// Whitespace-only input normalizes to empty; callers must refuse to
    /// score such a résumé.
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }
}

/// Normalizes raw extracted text: trim each line, drop empties, keep the
/// first occurrence of every distinct line, then produce a lowercase
/// matching string with periods removed and whitespace runs collapsed.
///
/// Idempotent on the matching string: re-normalizing the output yields the
/// same matching string.
pub fn normalize(raw_text: &str) -> NormalizedResume {
    let mut seen: Vec<&str> = Vec::new();
    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() || seen.contains(&line) {
            continue;
        }
        seen.push(line);
    }
    let text = seen.join("\n");

    let folded = text.to_lowercase().replace('.', "");
    let matching = folded.split_whitespace().collect::<Vec<_>>().join(" ");

    NormalizedResume { text, matching }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_periods() {
        let n = normalize("Experienced React.js Developer.");
        assert_eq!(n.matching, "experienced reactjs developer");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let n = normalize("JavaScript   and\t CSS");
        assert_eq!(n.matching, "javascript and css");
    }

    #[test]
    fn test_drops_repeated_lines() {
        let n = normalize("Page footer\nSkills: React\nPage footer\nSkills: React");
        assert_eq!(n.text, "Page footer\nSkills: React");
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        // Exact-content dedup only; case variants survive into `text`.
        let n = normalize("React\nreact");
        assert_eq!(n.text, "React\nreact");
    }

    #[test]
    fn test_preserves_first_appearance_order() {
        let n = normalize("b\na\nb\nc\na");
        assert_eq!(n.text, "b\na\nc");
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_idempotent_on_matching_string() {
        let once = normalize("  Senior   Dev.\nSenior   Dev.\nGitHub: foo  ");
        let twice = normalize(&once.matching);
        assert_eq!(once.matching, twice.matching);
    }

    #[test]
    fn test_trims_line_edges() {
        let n = normalize("   html and css   ");
        assert_eq!(n.text, "html and css");
        assert_eq!(n.matching, "html and css");
    }
}
