//! CLI output formatting.
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Decision
//!
//! ```text
//! Mode: priority
//! Pages
//!     home
//!     categories
//!     recent-articles
//! ```
//!
//! Full mode shows `(all pages)`; an empty Minimal decision shows
//! `(nothing to build)`.
//!
//! ## Change set
//!
//! ```text
//! recent-articles  recent-articles/2024/a.md
//! archive          archive/2020/foo.md
//! other            README.md
//! ```

use crate::category::{self, Category};
use crate::changeset::ChangeSet;
use crate::classify::{BuildDecision, BuildMode};
use crate::config::RootsConfig;

/// Indentation for page lines under the `Pages` header.
fn indent(line: &str) -> String {
    format!("    {line}")
}

/// Format a build decision as display lines.
pub fn format_decision(decision: &BuildDecision) -> Vec<String> {
    let mut lines = vec![format!("Mode: {}", decision.mode.label())];
    lines.push("Pages".to_string());
    match decision.mode {
        BuildMode::Full => lines.push(indent("(all pages)")),
        _ if decision.pages.is_empty() => lines.push(indent("(nothing to build)")),
        _ => lines.extend(decision.pages.iter().map(|p| indent(p))),
    }
    lines
}

pub fn print_decision(decision: &BuildDecision) {
    for line in format_decision(decision) {
        println!("{line}");
    }
}

/// Format a change set as `category  path` lines, one per path, in input
/// order. The category column is padded to the longest label.
pub fn format_changeset(changes: &ChangeSet, roots: &RootsConfig) -> Vec<String> {
    let width = Category::RecentArticles.label().len();
    changes
        .paths()
        .iter()
        .map(|path| {
            let label = category::categorize(path, roots).label();
            format!("{label:<width$}  {path}")
        })
        .collect()
}

pub fn print_changeset(changes: &ChangeSet, roots: &RootsConfig) {
    for line in format_changeset(changes, roots) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScopeConfig;

    fn changes(paths: &[&str]) -> ChangeSet {
        ChangeSet::new(paths.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn priority_decision_lists_fixed_pages() {
        let decision = BuildDecision {
            mode: BuildMode::Priority,
            pages: vec!["home".into(), "categories".into()],
        };
        assert_eq!(
            format_decision(&decision),
            vec!["Mode: priority", "Pages", "    home", "    categories"]
        );
    }

    #[test]
    fn full_decision_shows_all_pages_marker() {
        let decision = BuildDecision {
            mode: BuildMode::Full,
            pages: vec![],
        };
        assert_eq!(
            format_decision(&decision),
            vec!["Mode: full", "Pages", "    (all pages)"]
        );
    }

    #[test]
    fn empty_minimal_decision_shows_noop_marker() {
        let decision = BuildDecision {
            mode: BuildMode::Minimal,
            pages: vec![],
        };
        assert_eq!(
            format_decision(&decision),
            vec!["Mode: minimal", "Pages", "    (nothing to build)"]
        );
    }

    #[test]
    fn minimal_decision_lists_mapped_pages() {
        let decision = BuildDecision {
            mode: BuildMode::Minimal,
            pages: vec!["archive/2020/foo".into()],
        };
        let lines = format_decision(&decision);
        assert_eq!(lines[0], "Mode: minimal");
        assert_eq!(lines[2], "    archive/2020/foo");
    }

    #[test]
    fn changeset_lines_show_category_and_path() {
        let config = ScopeConfig::default();
        let lines = format_changeset(
            &changes(&["recent-articles/2024/a.md", "README.md"]),
            &config.roots,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "recent-articles  recent-articles/2024/a.md");
        assert_eq!(lines[1], "other            README.md");
    }

    #[test]
    fn empty_changeset_formats_to_nothing() {
        let config = ScopeConfig::default();
        assert!(format_changeset(&ChangeSet::empty(), &config.roots).is_empty());
    }
}
