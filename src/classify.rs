//! The build-scope decision function.
//!
//! [`decide`] maps a validated [`ChangeSet`] plus a force-full override to a
//! [`BuildDecision`]: which of the three build modes to run and, for Minimal,
//! exactly which pages. It is a pure function — no I/O, no hidden state, no
//! error channel. Validation already happened at `ChangeSet` construction,
//! and "nothing to build" is a valid outcome, not a failure.
//!
//! ## Decision order
//!
//! 1. `force_full` set → [`BuildMode::Full`], nothing else evaluated.
//! 2. Any path under a high-impact root → [`BuildMode::Priority`] with the
//!    configured fixed page list. The page set is deliberately *not* derived
//!    from the change set: Priority over-builds a small curated list rather
//!    than tracking which listing page embeds which article.
//! 3. Otherwise → [`BuildMode::Minimal`] with the image of the path→page
//!    mapping; paths outside every content root drop out silently.

use crate::category;
use crate::changeset::ChangeSet;
use crate::config::ScopeConfig;
use crate::pages;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Scope of page regeneration, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    /// Regenerate every known page.
    Full,
    /// Regenerate the fixed curated page list.
    Priority,
    /// Regenerate exactly the pages derived from the change set.
    Minimal,
}

impl BuildMode {
    /// Stable display label, matching the serialized kebab-case tag.
    pub fn label(self) -> &'static str {
        match self {
            BuildMode::Full => "full",
            BuildMode::Priority => "priority",
            BuildMode::Minimal => "minimal",
        }
    }
}

/// The classifier's output: a mode plus the page set that mode regenerates.
///
/// Computed once per build invocation and handed straight to the generator;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDecision {
    pub mode: BuildMode,
    /// Page identifiers to regenerate. Empty for Full — the mode tag alone
    /// tells the generator to rebuild everything. For Priority this is the
    /// configured list in configured order; for Minimal it is sorted and
    /// deduplicated.
    pub pages: Vec<String>,
}

/// Decide the build scope for a change set.
///
/// Pure and idempotent: the same inputs always produce the same decision.
pub fn decide(changes: &ChangeSet, force_full: bool, config: &ScopeConfig) -> BuildDecision {
    if force_full {
        return BuildDecision {
            mode: BuildMode::Full,
            pages: Vec::new(),
        };
    }

    let high_impact = changes
        .paths()
        .iter()
        .any(|path| category::categorize(path, &config.roots).is_high_impact());

    if high_impact {
        return BuildDecision {
            mode: BuildMode::Priority,
            pages: config.priority.pages.clone(),
        };
    }

    let pages: BTreeSet<String> = changes
        .paths()
        .iter()
        .filter_map(|path| pages::page_id(path, config.roots.content_roots()))
        .collect();

    BuildDecision {
        mode: BuildMode::Minimal,
        pages: pages.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> ScopeConfig {
        ScopeConfig::default()
    }

    fn changes(paths: &[&str]) -> ChangeSet {
        ChangeSet::new(paths.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn force_full_wins_over_everything() {
        let config = stock();
        for cs in [
            changes(&[]),
            changes(&["archive/2020/foo.md"]),
            changes(&["high-priority/x.md", "recent-articles/y.md"]),
        ] {
            let decision = decide(&cs, true, &config);
            assert_eq!(decision.mode, BuildMode::Full);
            assert!(decision.pages.is_empty());
        }
    }

    #[test]
    fn high_priority_change_yields_priority() {
        let config = stock();
        let decision = decide(&changes(&["high-priority/launch.md"]), false, &config);
        assert_eq!(decision.mode, BuildMode::Priority);
        assert_eq!(decision.pages, config.priority.pages);
    }

    #[test]
    fn recent_articles_change_yields_priority() {
        let config = stock();
        let decision = decide(&changes(&["recent-articles/2024/a.md"]), false, &config);
        assert_eq!(decision.mode, BuildMode::Priority);
    }

    #[test]
    fn categories_change_yields_priority() {
        let config = stock();
        let decision = decide(&changes(&["categories/rust.md"]), false, &config);
        assert_eq!(decision.mode, BuildMode::Priority);
    }

    #[test]
    fn priority_pages_ignore_change_set_contents() {
        let config = stock();
        // Mixed set: the archive path must not leak into the page list.
        let decision = decide(
            &changes(&["high-priority/x.md", "archive/y.md"]),
            false,
            &config,
        );
        assert_eq!(decision.mode, BuildMode::Priority);
        assert_eq!(
            decision.pages,
            vec!["home", "categories", "recent-articles"]
        );
    }

    #[test]
    fn archive_only_change_yields_minimal() {
        let config = stock();
        let decision = decide(&changes(&["archive/2020/foo.md"]), false, &config);
        assert_eq!(decision.mode, BuildMode::Minimal);
        assert_eq!(decision.pages, vec!["archive/2020/foo"]);
    }

    #[test]
    fn minimal_drops_unrooted_paths_silently() {
        let config = stock();
        let decision = decide(
            &changes(&["archive/2020/foo.md", "README.md", ".github/ci.yml"]),
            false,
            &config,
        );
        assert_eq!(decision.mode, BuildMode::Minimal);
        assert_eq!(decision.pages, vec!["archive/2020/foo"]);
    }

    #[test]
    fn minimal_pages_sorted_and_deduped() {
        let config = stock();
        let decision = decide(
            &changes(&[
                "archive/b.md",
                "archive/a.md",
                // Sidecar next to the article collapses to the same page.
                "archive/a.txt",
            ]),
            false,
            &config,
        );
        assert_eq!(decision.pages, vec!["archive/a", "archive/b"]);
    }

    #[test]
    fn empty_change_set_is_minimal_noop() {
        let config = stock();
        let decision = decide(&ChangeSet::empty(), false, &config);
        assert_eq!(decision.mode, BuildMode::Minimal);
        assert!(decision.pages.is_empty());
    }

    #[test]
    fn lookalike_directory_is_not_high_impact() {
        let config = stock();
        let decision = decide(&changes(&["recent-articles-backup/foo.md"]), false, &config);
        assert_eq!(decision.mode, BuildMode::Minimal);
        // Not under any content root either, so nothing to build.
        assert!(decision.pages.is_empty());
    }

    #[test]
    fn decide_is_idempotent() {
        let config = stock();
        let cs = changes(&["archive/2020/foo.md", "high-priority/x.md"]);
        assert_eq!(decide(&cs, false, &config), decide(&cs, false, &config));
        assert_eq!(decide(&cs, true, &config), decide(&cs, true, &config));
    }

    #[test]
    fn custom_priority_pages_flow_through() {
        let mut config = stock();
        config.priority.pages = vec!["home".to_string(), "sitemap".to_string()];
        let decision = decide(&changes(&["categories/x.md"]), false, &config);
        assert_eq!(decision.pages, vec!["home", "sitemap"]);
    }

    #[test]
    fn decision_serializes_with_kebab_case_mode() {
        let decision = BuildDecision {
            mode: BuildMode::Priority,
            pages: vec!["home".to_string()],
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"mode\":\"priority\""));
        assert!(json.contains("\"pages\":[\"home\"]"));
    }
}
