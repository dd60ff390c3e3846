//! Verification-tier classification for task descriptions.
//!
//! Ordered rule evaluation with explicit override and fallback semantics:
//! explicit tier override, then doc-only / critical / standard keyword
//! tables, then an optional specialist-availability gate, then a light-review
//! default. Classification is pure for fixed inputs except for the
//! availability gate's filesystem read.

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::catalog::scan_agents_dir;

/// Canonical reviewer roster members, in escalation order.
const CODE_REVIEWER: &str = "voltagent-qa-sec:code-reviewer";
const QA_EXPERT: &str = "voltagent-qa-sec:qa-expert";
const SECURITY_ENGINEER: &str = "voltagent-infra:security-engineer";

/// Documentation-only terms. A hit skips verification unless the combined
/// text ends in a source-file extension.
const TIER0_KEYWORDS: &[&str] = &["readme", "documentation", "docs only", "comment", "changelog"];

/// Critical paths requiring the full verification team.
const TIER3_KEYWORDS: &[&str] = &[
    "security", "auth", "authentication", "authorization", "oauth",
    "payment", "billing", "stripe", "checkout", "subscription",
    "database", "migration", "schema", "production", "deploy",
    "encryption", "password", "token", "jwt", "session",
    "vulnerability", "csrf", "xss", "injection", "sanitize",
];

/// Standard features requiring code review plus QA.
const TIER2_KEYWORDS: &[&str] = &[
    "api", "endpoint", "route", "controller", "service",
    "business logic", "validation", "integration", "webhook",
    "error handling", "retry", "circuit breaker", "rate limit",
    "cache", "redis", "queue", "worker", "job",
    "test", "coverage", "e2e", "integration test",
];

/// Extensions that suppress a doc-only match when the combined text names a
/// code file. Checked against the suffix of the whole combined string, not
/// per file-list entry; with several files listed only the last one counts.
const SOURCE_FILE_EXTENSIONS: &[&str] =
    &[".py", ".js", ".ts", ".go", ".rs", ".java", ".rb", ".php"];

/// Verification effort tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// No verification.
    Skip,
    /// Light review by a single reviewer.
    Light,
    /// Code review plus QA.
    Standard,
    /// Full team including security.
    Critical,
}

impl Tier {
    /// Parse an explicit override value; out-of-range values are `None`.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Skip),
            1 => Some(Self::Light),
            2 => Some(Self::Standard),
            3 => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Skip => 0,
            Self::Light => 1,
            Self::Standard => 2,
            Self::Critical => 3,
        }
    }

    /// Fixed reviewer roster for this tier.
    fn roster(self) -> Vec<String> {
        let names: &[&str] = match self {
            Self::Skip => &[],
            Self::Light => &[CODE_REVIEWER],
            Self::Standard => &[CODE_REVIEWER, QA_EXPERT],
            Self::Critical => &[CODE_REVIEWER, QA_EXPERT, SECURITY_ENGINEER],
        };
        names.iter().map(ToString::to_string).collect()
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Classification output, suitable for direct JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct TierResult {
    pub tier: Tier,
    pub reason: String,
    pub specialists: Vec<String>,
}

impl TierResult {
    fn for_tier(tier: Tier, reason: impl Into<String>) -> Self {
        Self {
            tier,
            reason: reason.into(),
            specialists: tier.roster(),
        }
    }
}

/// Knobs for [`classify`].
#[derive(Debug, Clone, Default)]
pub struct TriageOptions {
    /// Explicit tier override; values outside 0..=3 are silently ignored.
    pub override_tier: Option<i64>,
    /// When set, a missing `code-reviewer` in the agents directory
    /// downgrades the default to tier 0.
    pub check_available: bool,
    /// Agents directory consulted by the availability gate.
    pub agents_dir: Option<PathBuf>,
}

/// Determine the verification tier for a task.
///
/// First matching rule wins, evaluated strictly in order: explicit override,
/// doc-only keywords, critical keywords, standard keywords, availability
/// gate, light-review default.
pub fn classify(description: &str, file_list: &str, options: &TriageOptions) -> TierResult {
    if let Some(raw) = options.override_tier
        && let Some(tier) = Tier::from_index(raw)
    {
        let reason = match tier {
            Tier::Skip => "Explicitly skipped via verification_tier=0".to_string(),
            _ => format!("Explicitly set to Tier {} via verification_tier", tier.as_u8()),
        };
        return TierResult::for_tier(tier, reason);
    }

    let combined = format!("{} {}", description.to_lowercase(), file_list.to_lowercase());
    let names_code_file = SOURCE_FILE_EXTENSIONS
        .iter()
        .any(|ext| combined.ends_with(ext));

    if !names_code_file
        && let Some(keyword) = first_hit(&combined, TIER0_KEYWORDS)
    {
        return TierResult::for_tier(Tier::Skip, format!("Documentation only: {keyword}"));
    }

    if let Some(keyword) = first_hit(&combined, TIER3_KEYWORDS) {
        return TierResult::for_tier(Tier::Critical, format!("Critical path detected: {keyword}"));
    }

    if let Some(keyword) = first_hit(&combined, TIER2_KEYWORDS) {
        return TierResult::for_tier(Tier::Standard, format!("Standard feature detected: {keyword}"));
    }

    if options.check_available
        && let Some(agents_dir) = &options.agents_dir
    {
        let available = scan_agents_dir(agents_dir);
        if !available.iter().any(|a| a.name == "code-reviewer") {
            return TierResult::for_tier(Tier::Skip, "No verification specialists available");
        }
    }

    TierResult::for_tier(Tier::Light, "Simple change - light review")
}

fn first_hit<'a>(haystack: &str, keywords: &[&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|kw| haystack.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_plain(description: &str, files: &str) -> TierResult {
        classify(description, files, &TriageOptions::default())
    }

    #[test]
    fn explicit_override_wins_over_any_content() {
        for raw in 0..=3 {
            let options = TriageOptions {
                override_tier: Some(raw),
                ..Default::default()
            };
            let result = classify("add oauth payment to production database", "auth.rs", &options);
            assert_eq!(i64::from(result.tier.as_u8()), raw);
            assert_eq!(result.specialists.len(), raw as usize);
            assert!(result.reason.contains("verification_tier"));
        }
    }

    #[test]
    fn out_of_range_override_falls_through_to_rules() {
        for raw in [-1, 4, 99] {
            let options = TriageOptions {
                override_tier: Some(raw),
                ..Default::default()
            };
            let with_override = classify("add oauth login", "", &options);
            let without = classify_plain("add oauth login", "");
            assert_eq!(with_override.tier, without.tier);
            assert_eq!(with_override.reason, without.reason);
        }
    }

    #[test]
    fn oauth_checkout_is_critical_with_three_reviewers() {
        let result = classify_plain("add OAuth login to checkout flow", "");
        assert_eq!(result.tier, Tier::Critical);
        // "auth" precedes "oauth" in the table and substring-matches inside it.
        assert!(result.reason.contains("auth"));
        assert_eq!(
            result.specialists,
            vec![CODE_REVIEWER, QA_EXPERT, SECURITY_ENGINEER]
        );
    }

    #[test]
    fn readme_typo_skips_verification() {
        let result = classify_plain("fix typo in README", "README.md");
        assert_eq!(result.tier, Tier::Skip);
        assert!(result.reason.contains("readme"));
        assert!(result.specialists.is_empty());
    }

    #[test]
    fn retry_worker_is_standard_with_two_reviewers() {
        let result = classify_plain("implement retry logic for the queue worker", "worker.go");
        assert_eq!(result.tier, Tier::Standard);
        assert_eq!(result.specialists, vec![CODE_REVIEWER, QA_EXPERT]);
    }

    #[test]
    fn critical_beats_standard_on_co_occurrence() {
        let result = classify_plain("add retry to the auth endpoint cache", "");
        assert_eq!(result.tier, Tier::Critical);
        assert!(result.reason.contains("auth"));
    }

    #[test]
    fn keyword_match_is_case_insensitive_anywhere() {
        let result = classify_plain("harden SESSION handling end to end", "");
        assert_eq!(result.tier, Tier::Critical);
        assert!(result.reason.contains("session"));
    }

    #[test]
    fn doc_keyword_with_trailing_code_file_is_not_doc_only() {
        let result = classify_plain("update the comment in the script", "build.py");
        assert_ne!(result.tier, Tier::Skip);
    }

    // Known edge: the suffix heuristic inspects only the end of the whole
    // combined string, so a code file followed by a doc file is still
    // treated as doc-only.
    #[test]
    fn suffix_heuristic_misses_earlier_code_files() {
        let result = classify_plain("update the changelog", "build.py README.md");
        assert_eq!(result.tier, Tier::Skip);
    }

    #[test]
    fn plain_change_defaults_to_light_review() {
        let result = classify_plain("rename a local variable", "");
        assert_eq!(result.tier, Tier::Light);
        assert_eq!(result.reason, "Simple change - light review");
        assert_eq!(result.specialists, vec![CODE_REVIEWER]);
    }

    #[test]
    fn availability_gate_downgrades_without_code_reviewer() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("stylist.md"), "name: stylist\n").unwrap();

        let options = TriageOptions {
            check_available: true,
            agents_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let result = classify("rename a local variable", "", &options);
        assert_eq!(result.tier, Tier::Skip);
        assert_eq!(result.reason, "No verification specialists available");
        assert!(result.specialists.is_empty());
    }

    #[test]
    fn availability_gate_passes_with_code_reviewer() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("code-reviewer.md"), "name: code-reviewer\n").unwrap();

        let options = TriageOptions {
            check_available: true,
            agents_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let result = classify("rename a local variable", "", &options);
        assert_eq!(result.tier, Tier::Light);
    }

    #[test]
    fn availability_gate_only_runs_when_no_rule_matched() {
        let options = TriageOptions {
            check_available: true,
            agents_dir: Some(PathBuf::from("/nonexistent/agents")),
            ..Default::default()
        };
        let result = classify("add oauth login", "", &options);
        assert_eq!(result.tier, Tier::Critical);
    }

    #[test]
    fn result_serializes_with_integer_tier() {
        let result = classify_plain("fix typo in README", "README.md");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tier"], 0);
        assert!(json["specialists"].as_array().unwrap().is_empty());
    }
}
