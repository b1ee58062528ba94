//! Role catalog — alias resolution plus the per-role skill taxonomy.
//!
//! The catalog is an injected, immutable configuration object: built-in
//! defaults ship in code, and `ROLE_CATALOG_PATH` can point at a JSON file
//! with the same shape to swap the data without touching engine code.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Canonical identifier for a supported job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleKey {
    ReactDeveloper,
    FrontendDeveloper,
    BackendDeveloper,
    JavascriptDeveloper,
    WebDeveloper,
    AngularDeveloper,
}

impl RoleKey {
    /// Unresolvable role text falls back here, silently (documented fallback,
    /// not a failure).
    pub const DEFAULT: RoleKey = RoleKey::WebDeveloper;

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::ReactDeveloper => "react-developer",
            RoleKey::FrontendDeveloper => "frontend-developer",
            RoleKey::BackendDeveloper => "backend-developer",
            RoleKey::JavascriptDeveloper => "javascript-developer",
            RoleKey::WebDeveloper => "web-developer",
            RoleKey::AngularDeveloper => "angular-developer",
        }
    }
}

/// One role's configuration: accepted synonyms and its partitioned skill set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role: RoleKey,
    /// Lowercase, trimmed synonyms. Must be disjoint across profiles.
    pub aliases: Vec<String>,
    /// Core skills, weighted at 80% of the base score.
    pub major: Vec<String>,
    /// Supporting skills, weighted at 20%.
    pub minor: Vec<String>,
    /// When set, the role reports no missing skills and takes no deduction.
    /// Named flag for an observed quirk of the original analyzer; only
    /// react-developer carries it in the built-in data.
    #[serde(default)]
    pub suppress_missing: bool,
}

/// Ordered set of role profiles. Declared order is the alias tie-break order:
/// if a synonym ever appeared under two profiles, the first declared wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    pub profiles: Vec<RoleProfile>,
}

impl RoleCatalog {
    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        RoleCatalog {
            profiles: vec![
                RoleProfile {
                    role: RoleKey::ReactDeveloper,
                    aliases: strings(&[
                        "react developer",
                        "react dev",
                        "reactjs developer",
                        "react.js developer",
                        "react engineer",
                    ]),
                    major: strings(&["react", "javascript", "html", "css"]),
                    minor: strings(&["jsx", "hooks", "state", "props", "component"]),
                    suppress_missing: true,
                },
                RoleProfile {
                    role: RoleKey::FrontendDeveloper,
                    aliases: strings(&[
                        "frontend developer",
                        "front-end developer",
                        "front end developer",
                        "ui developer",
                        "frontend engineer",
                    ]),
                    major: strings(&["html", "css", "javascript", "react"]),
                    minor: strings(&["typescript", "responsive", "webpack", "accessibility", "git"]),
                    suppress_missing: false,
                },
                RoleProfile {
                    role: RoleKey::BackendDeveloper,
                    aliases: strings(&[
                        "backend developer",
                        "back-end developer",
                        "back end developer",
                        "node developer",
                        "nodejs developer",
                        "server developer",
                    ]),
                    major: strings(&["node", "express", "api", "database"]),
                    minor: strings(&["sql", "mongodb", "rest", "authentication", "docker"]),
                    suppress_missing: false,
                },
                RoleProfile {
                    role: RoleKey::JavascriptDeveloper,
                    aliases: strings(&[
                        "javascript developer",
                        "js developer",
                        "javascript engineer",
                        "ecmascript developer",
                    ]),
                    major: strings(&["javascript", "es6", "dom", "async"]),
                    minor: strings(&["promises", "closures", "typescript", "node", "testing"]),
                    suppress_missing: false,
                },
                RoleProfile {
                    role: RoleKey::WebDeveloper,
                    aliases: strings(&[
                        "web developer",
                        "website developer",
                        "full stack developer",
                        "full-stack developer",
                        "fullstack developer",
                    ]),
                    major: strings(&["html", "css", "javascript"]),
                    minor: strings(&["react", "node", "git", "responsive"]),
                    suppress_missing: false,
                },
                RoleProfile {
                    role: RoleKey::AngularDeveloper,
                    aliases: strings(&[
                        "angular developer",
                        "angularjs developer",
                        "angular engineer",
                    ]),
                    major: strings(&["angular", "typescript", "html", "css"]),
                    minor: strings(&["rxjs", "components", "services", "directives", "routing"]),
                    suppress_missing: false,
                },
            ],
        }
    }

    /// Loads a catalog from a JSON file and validates its invariants.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role catalog '{path}'"))?;
        let catalog: RoleCatalog = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse role catalog '{path}'"))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks alias disjointness across profiles, major/minor disjointness
    /// per profile, and that the default role is present.
    pub fn validate(&self) -> Result<()> {
        let mut seen_aliases: Vec<&str> = Vec::new();
        let mut has_default = false;

        for profile in &self.profiles {
            if profile.role == RoleKey::DEFAULT {
                has_default = true;
            }
            for alias in &profile.aliases {
                let alias = alias.as_str();
                if seen_aliases.contains(&alias) {
                    bail!(
                        "Alias '{alias}' appears under more than one role (second: {})",
                        profile.role.as_str()
                    );
                }
                seen_aliases.push(alias);
            }
            for skill in &profile.major {
                if profile.minor.contains(skill) {
                    bail!(
                        "Skill '{skill}' is both major and minor for {}",
                        profile.role.as_str()
                    );
                }
            }
        }

        if !has_default {
            bail!(
                "Role catalog has no profile for the default role '{}'",
                RoleKey::DEFAULT.as_str()
            );
        }
        Ok(())
    }

    /// Maps free-text role input to a canonical key. Total: unknown input
    /// resolves to `RoleKey::DEFAULT`, first declared alias match wins.
    pub fn resolve(&self, raw_role: &str) -> RoleKey {
        let needle = raw_role.trim().to_lowercase();
        self.profiles
            .iter()
            .find(|p| p.aliases.iter().any(|a| a == &needle))
            .map(|p| p.role)
            .unwrap_or(RoleKey::DEFAULT)
    }

    /// Pure taxonomy lookup. Defined for every key reachable from `resolve`;
    /// falls back to the default profile if a key is somehow absent.
    pub fn profile(&self, role: RoleKey) -> &RoleProfile {
        self.profiles
            .iter()
            .find(|p| p.role == role)
            .or_else(|| self.profiles.iter().find(|p| p.role == RoleKey::DEFAULT))
            .unwrap_or(&self.profiles[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        RoleCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_every_alias_resolves_to_its_own_role() {
        let catalog = RoleCatalog::builtin();
        for profile in &catalog.profiles {
            for alias in &profile.aliases {
                assert_eq!(
                    catalog.resolve(alias),
                    profile.role,
                    "alias '{alias}' resolved away from {}",
                    profile.role.as_str()
                );
            }
        }
    }

    #[test]
    fn test_resolution_is_case_and_whitespace_insensitive() {
        let catalog = RoleCatalog::builtin();
        assert_eq!(catalog.resolve("  React Developer  "), RoleKey::ReactDeveloper);
        assert_eq!(catalog.resolve("FRONTEND DEVELOPER"), RoleKey::FrontendDeveloper);
    }

    #[test]
    fn test_unknown_role_falls_back_to_web_developer() {
        let catalog = RoleCatalog::builtin();
        assert_eq!(catalog.resolve("totally unknown role xyz"), RoleKey::WebDeveloper);
        assert_eq!(catalog.resolve(""), RoleKey::WebDeveloper);
    }

    #[test]
    fn test_profile_lookup_defined_for_every_key() {
        let catalog = RoleCatalog::builtin();
        for key in [
            RoleKey::ReactDeveloper,
            RoleKey::FrontendDeveloper,
            RoleKey::BackendDeveloper,
            RoleKey::JavascriptDeveloper,
            RoleKey::WebDeveloper,
            RoleKey::AngularDeveloper,
        ] {
            let profile = catalog.profile(key);
            assert_eq!(profile.role, key);
            assert!(!profile.major.is_empty());
            assert!(!profile.minor.is_empty());
        }
    }

    #[test]
    fn test_skill_tokens_are_lowercase() {
        let catalog = RoleCatalog::builtin();
        for profile in &catalog.profiles {
            for token in profile.major.iter().chain(&profile.minor) {
                assert_eq!(token, &token.to_lowercase());
            }
        }
    }

    #[test]
    fn test_only_react_developer_suppresses_missing() {
        let catalog = RoleCatalog::builtin();
        for profile in &catalog.profiles {
            assert_eq!(
                profile.suppress_missing,
                profile.role == RoleKey::ReactDeveloper
            );
        }
    }

    #[test]
    fn test_role_key_serde_is_kebab_case() {
        let json = serde_json::to_string(&RoleKey::ReactDeveloper).unwrap();
        assert_eq!(json, r#""react-developer""#);
        let back: RoleKey = serde_json::from_str(r#""web-developer""#).unwrap();
        assert_eq!(back, RoleKey::WebDeveloper);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = RoleCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: RoleCatalog = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.profiles.len(), catalog.profiles.len());
    }

    #[test]
    fn test_duplicate_alias_rejected_by_validation() {
        let mut catalog = RoleCatalog::builtin();
        let alias = catalog.profiles[0].aliases[0].clone();
        catalog.profiles[1].aliases.push(alias);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_overlapping_buckets_rejected_by_validation() {
        let mut catalog = RoleCatalog::builtin();
        let token = catalog.profiles[0].major[0].clone();
        catalog.profiles[0].minor.push(token);
        assert!(catalog.validate().is_err());
    }
}
