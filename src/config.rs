//! Build-scope configuration module.
//!
//! Handles loading, validating, and merging `buildscope.toml`. The config
//! carries the two pieces of policy the classifier must never hard-code:
//! which directory roots belong to which content category, and which pages a
//! Priority build regenerates.
//!
//! ## Config File Location
//!
//! Place `buildscope.toml` in the content repository root (the directory the
//! diffs are relative to). All keys are optional — user files are sparse
//! overrides merged on top of stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [roots]
//! high_priority   = ["high-priority"]    # Always-fresh editorial content
//! recent_articles = ["recent-articles"]  # Current articles, listed on the index
//! categories      = ["categories"]       # Taxonomy / category pages
//! archive         = ["archive"]          # Archived content, rebuilt per-page
//!
//! [priority]
//! # Pages a Priority build regenerates, regardless of which high-impact
//! # path changed.
//! pages = ["home", "categories", "recent-articles"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file within the content repository root.
pub const CONFIG_FILENAME: &str = "buildscope.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Classifier configuration loaded from `buildscope.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Directory roots per content category.
    pub roots: RootsConfig,
    /// Priority-mode build policy.
    pub priority: PriorityConfig,
}

impl ScopeConfig {
    /// Validate config values.
    ///
    /// Roots must be non-empty, repository-relative, and free of trailing
    /// slashes — the prefix matcher compares them against `git diff` output,
    /// which emits bare relative paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (section, roots) in [
            ("roots.high_priority", &self.roots.high_priority),
            ("roots.recent_articles", &self.roots.recent_articles),
            ("roots.categories", &self.roots.categories),
            ("roots.archive", &self.roots.archive),
        ] {
            for root in roots {
                if root.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{section} entries must not be empty"
                    )));
                }
                if root.starts_with('/') {
                    return Err(ConfigError::Validation(format!(
                        "{section} entry '{root}' must be repository-relative, not absolute"
                    )));
                }
                if root.ends_with('/') {
                    return Err(ConfigError::Validation(format!(
                        "{section} entry '{root}' must not have a trailing slash"
                    )));
                }
            }
        }
        if self.priority.pages.is_empty() {
            return Err(ConfigError::Validation(
                "priority.pages must not be empty".into(),
            ));
        }
        if self.priority.pages.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Validation(
                "priority.pages entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Directory roots per content category.
///
/// Each list holds repository-relative directory paths. A changed file is
/// assigned the category of the longest root that prefixes it on a full
/// path-segment boundary; files under no root are category "other".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootsConfig {
    /// Always-fresh editorial content. High impact.
    pub high_priority: Vec<String>,
    /// Current articles, surfaced on index/listing pages. High impact.
    pub recent_articles: Vec<String>,
    /// Taxonomy / category pages. High impact.
    pub categories: Vec<String>,
    /// Archived content. Low impact — rebuilt page-by-page.
    pub archive: Vec<String>,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            high_priority: vec!["high-priority".to_string()],
            recent_articles: vec!["recent-articles".to_string()],
            categories: vec!["categories".to_string()],
            archive: vec!["archive".to_string()],
        }
    }
}

impl RootsConfig {
    /// All configured roots, regardless of category. These are the content
    /// roots for the path→page mapping in Minimal mode.
    pub fn content_roots(&self) -> impl Iterator<Item = &str> {
        self.high_priority
            .iter()
            .chain(&self.recent_articles)
            .chain(&self.categories)
            .chain(&self.archive)
            .map(String::as_str)
    }
}

/// Priority-mode build policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityConfig {
    /// Page identifiers a Priority build regenerates. Independent of the
    /// change set by design: Priority over-builds a fixed curated list
    /// rather than tracking which listing embeds which article.
    pub pages: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            pages: vec![
                "home".to_string(),
                "categories".to_string(),
                "recent-articles".to_string(),
            ],
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ScopeConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `buildscope.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no config file exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ScopeConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ScopeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `buildscope.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. Returns the stock defaults if no file exists.
pub fn load_config(dir: &Path) -> Result<ScopeConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Load config from an explicit file path.
///
/// Unlike [`load_config`], a missing file is an error here — the user named
/// the file, so silently substituting defaults would mask the typo.
pub fn load_config_file(path: &Path) -> Result<ScopeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `buildscope.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Buildscope Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as buildscope.toml in the content repository root — the
# directory your `git diff` paths are relative to.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Content category roots
# ---------------------------------------------------------------------------
# Repository-relative directories, no trailing slash. A changed file takes
# the category of the longest root that prefixes it on a full path-segment
# boundary. Changes under high_priority, recent_articles, or categories
# trigger a Priority build; changes under archive (or under no root at all)
# trigger a Minimal build of just the affected pages.
[roots]
high_priority   = ["high-priority"]
recent_articles = ["recent-articles"]
categories      = ["categories"]
archive         = ["archive"]

# ---------------------------------------------------------------------------
# Priority build policy
# ---------------------------------------------------------------------------
[priority]
# Page identifiers a Priority build regenerates. This list is fixed — it is
# NOT derived from the change set. Priority deliberately over-builds a small
# curated set (home, category pages, the recent-articles index) instead of
# tracking which listing embeds which article.
pages = ["home", "categories", "recent-articles"]
"##
}
