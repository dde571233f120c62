//! # Buildscope
//!
//! A build-scope classifier for Git-backed static content sites. Given the
//! set of file paths that changed since the last successful build, buildscope
//! decides how much of the site must be regenerated — everything, a curated
//! high-traffic subset, or just the pages touched by the change.
//!
//! # Architecture: Diff → Classify → Decide
//!
//! The tool is a thin pipeline around one pure function:
//!
//! ```text
//! 1. Diff      git diff --name-only  →  ChangeSet     (repo → changed paths)
//! 2. Classify  ChangeSet             →  categories    (path → content category)
//! 3. Decide    categories + policy   →  BuildDecision (mode + page set)
//! ```
//!
//! The decision step ([`classify::decide`]) does no I/O of its own: it takes
//! the change set and the force-full flag as explicit inputs and returns a
//! [`classify::BuildDecision`]. Every invocation is independent and
//! side-effect-free, so CI can call it once per run and unit tests can cover
//! every policy branch without a git repository.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`diff`] | Change-set provider — runs `git diff --name-only` between two revisions |
//! | [`changeset`] | `ChangeSet` construction and path well-formedness validation |
//! | [`category`] | Content categories and longest-prefix, segment-boundary path matching |
//! | [`pages`] | Content path → page identifier mapping |
//! | [`classify`] | The decision function: change set + force-full flag → build mode + pages |
//! | [`config`] | `buildscope.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting — pure `format_*` functions over decisions |
//!
//! # Design Decisions
//!
//! ## Three Modes, Not a Dependency Graph
//!
//! A precise incremental build needs a dependency graph from every content
//! file to every page that embeds it (listings, category indexes, the home
//! page). Maintaining that graph is the hard part of every SSG. Buildscope
//! deliberately sidesteps it with a three-way policy:
//!
//! - **Full**: everything. Chosen only by an explicit override (e.g. a
//!   scheduled monthly trigger).
//! - **Priority**: a fixed, configured page list (home, category pages, the
//!   recent-articles index). Chosen whenever a high-impact path changed.
//!   Priority over-builds on purpose — rebuilding a handful of listing pages
//!   that didn't strictly need it is far cheaper than tracking which ones did.
//! - **Minimal**: exactly the pages derived from the changed paths. Chosen
//!   when only archive or unclassified content moved.
//!
//! ## Policy Lives in Config, Mechanism in Code
//!
//! Which directories count as high-impact and which pages the Priority mode
//! rebuilds are editorial policy, not mechanism. Both come from
//! `buildscope.toml` ([`config::ScopeConfig`]); the classifier never
//! hard-codes a directory name. Tests substitute fixture configs the same way.
//!
//! ## Segment-Boundary Prefix Matching
//!
//! A path is under a root only when the root is a full path-segment prefix:
//! `recent-articles/2024/a.md` is under `recent-articles`, but
//! `recent-articles-backup/a.md` is not. When configured roots nest, the
//! longest matching root wins, so `recent-articles/categories/` can be carved
//! out of `recent-articles/` without ambiguity.
//!
//! ## "Nothing Changed" Is Not an Error
//!
//! An empty change set resolves to a Minimal decision with an empty page set.
//! CI pipelines diff every push; most pushes touch no content at all, and the
//! correct answer is "build nothing", not a failure.

pub mod category;
pub mod changeset;
pub mod classify;
pub mod config;
pub mod diff;
pub mod output;
pub mod pages;
