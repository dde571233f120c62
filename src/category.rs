//! Content categories and path categorization.
//!
//! Every changed path belongs to exactly one [`Category`], determined by
//! matching it against the directory roots configured per category in
//! `buildscope.toml`. Two rules make the match deterministic:
//!
//! - **Segment boundaries**: a root matches only as a full path-segment
//!   prefix. `recent-articles` owns `recent-articles/2024/a.md` but not
//!   `recent-articles-backup/a.md` — sharing a prefix string is not enough.
//!   Matching is case-sensitive.
//! - **Longest prefix wins**: when configured roots nest (e.g. a dedicated
//!   `recent-articles/categories` root inside `recent-articles`), the path
//!   takes the category of the longest matching root.
//!
//! Paths under no configured root are [`Category::Other`]. That is not an
//! error — repositories carry READMEs, CI config, and tooling alongside
//! content, and those files simply don't drive a high-impact rebuild.

use crate::config::RootsConfig;
use serde::{Deserialize, Serialize};

/// Content category of a changed path, derived from its directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Always-fresh editorial content.
    HighPriority,
    /// Current articles, surfaced on index/listing pages.
    RecentArticles,
    /// Taxonomy / category pages.
    Categories,
    /// Archived content.
    Archive,
    /// Under no configured root (tooling, CI config, READMEs, ...).
    Other,
}

impl Category {
    /// Whether a change in this category mandates a Priority rebuild.
    ///
    /// High-priority, recent-articles, and category content all feed the
    /// curated listing pages; archive and unclassified files do not.
    pub fn is_high_impact(self) -> bool {
        matches!(
            self,
            Category::HighPriority | Category::RecentArticles | Category::Categories
        )
    }

    /// Stable display label, matching the serialized kebab-case tag.
    pub fn label(self) -> &'static str {
        match self {
            Category::HighPriority => "high-priority",
            Category::RecentArticles => "recent-articles",
            Category::Categories => "categories",
            Category::Archive => "archive",
            Category::Other => "other",
        }
    }
}

/// True when `path` lies under `root` on a full path-segment boundary.
///
/// A path equal to the root itself matches (the root directory entry can
/// appear in a diff, e.g. via a mode change).
pub fn under_root(path: &str, root: &str) -> bool {
    match path.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Categorize a path against the configured roots. Longest matching root
/// wins; no match is [`Category::Other`].
pub fn categorize(path: &str, roots: &RootsConfig) -> Category {
    let labeled = [
        (Category::HighPriority, &roots.high_priority),
        (Category::RecentArticles, &roots.recent_articles),
        (Category::Categories, &roots.categories),
        (Category::Archive, &roots.archive),
    ];

    let mut best: Option<(usize, Category)> = None;
    for (category, dirs) in labeled {
        for root in dirs {
            if under_root(path, root) {
                let better = match best {
                    Some((len, _)) => root.len() > len,
                    None => true,
                };
                if better {
                    best = Some((root.len(), category));
                }
            }
        }
    }
    best.map(|(_, c)| c).unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_roots() -> RootsConfig {
        RootsConfig::default()
    }

    #[test]
    fn path_under_stock_roots() {
        let roots = stock_roots();
        assert_eq!(
            categorize("high-priority/launch.md", &roots),
            Category::HighPriority
        );
        assert_eq!(
            categorize("recent-articles/2024/a.md", &roots),
            Category::RecentArticles
        );
        assert_eq!(categorize("categories/rust.md", &roots), Category::Categories);
        assert_eq!(categorize("archive/2020/foo.md", &roots), Category::Archive);
    }

    #[test]
    fn unrooted_path_is_other() {
        let roots = stock_roots();
        assert_eq!(categorize("README.md", &roots), Category::Other);
        assert_eq!(categorize(".github/workflows/ci.yml", &roots), Category::Other);
    }

    #[test]
    fn partial_directory_name_does_not_match() {
        let roots = stock_roots();
        // Shares the prefix string "recent-articles" but is a different dir.
        assert_eq!(
            categorize("recent-articles-backup/foo.md", &roots),
            Category::Other
        );
        assert_eq!(categorize("archives/foo.md", &roots), Category::Other);
    }

    #[test]
    fn match_is_case_sensitive() {
        let roots = stock_roots();
        assert_eq!(categorize("Archive/foo.md", &roots), Category::Other);
        assert_eq!(categorize("HIGH-PRIORITY/x.md", &roots), Category::Other);
    }

    #[test]
    fn path_equal_to_root_matches() {
        let roots = stock_roots();
        assert_eq!(categorize("archive", &roots), Category::Archive);
    }

    #[test]
    fn nested_root_longest_prefix_wins() {
        let mut roots = stock_roots();
        roots.categories.push("recent-articles/categories".to_string());

        // Inside the nested carve-out: the longer root wins.
        assert_eq!(
            categorize("recent-articles/categories/rust.md", &roots),
            Category::Categories
        );
        // Outside it: still recent-articles.
        assert_eq!(
            categorize("recent-articles/2024/a.md", &roots),
            Category::RecentArticles
        );
    }

    #[test]
    fn deep_paths_match_their_root() {
        let roots = stock_roots();
        assert_eq!(
            categorize("archive/2019/12/31/midnight.md", &roots),
            Category::Archive
        );
    }

    #[test]
    fn under_root_boundary_cases() {
        assert!(under_root("a/b.md", "a"));
        assert!(under_root("a", "a"));
        assert!(!under_root("ab/c.md", "a"));
        assert!(!under_root("a-backup/c.md", "a"));
        assert!(!under_root("b/a/c.md", "a"));
    }

    #[test]
    fn high_impact_categories() {
        assert!(Category::HighPriority.is_high_impact());
        assert!(Category::RecentArticles.is_high_impact());
        assert!(Category::Categories.is_high_impact());
        assert!(!Category::Archive.is_high_impact());
        assert!(!Category::Other.is_high_impact());
    }

    #[test]
    fn labels_match_serde_tags() {
        for cat in [
            Category::HighPriority,
            Category::RecentArticles,
            Category::Categories,
            Category::Archive,
            Category::Other,
        ] {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.label()));
        }
    }
}
