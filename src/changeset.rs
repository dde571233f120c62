//! Change-set construction and validation.
//!
//! A [`ChangeSet`] is the unordered collection of repository-relative file
//! paths that differ between the previous-build commit and the current one.
//! Construction is the validation boundary: once a `ChangeSet` exists, every
//! path in it is well-formed, and downstream classification can be infallible.
//!
//! ## Well-formedness
//!
//! Paths come from `git diff --name-only`, which emits non-empty relative
//! paths, so a violation here means the caller fed the classifier something
//! that never came from a diff. Rejected outright rather than guessed at:
//!
//! - empty strings
//! - strings containing a NUL byte
//! - absolute paths (the classifier matches against repository-relative roots)
//!
//! An *empty change set* is valid — "nothing changed" is a normal input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeSetError {
    #[error("invalid change-set path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// Validated collection of changed repository-relative file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<String>,
}

impl ChangeSet {
    /// Build a change set, validating every path.
    ///
    /// Order is preserved as given but carries no meaning; the classifier
    /// treats the collection as unordered.
    pub fn new(paths: Vec<String>) -> Result<Self, ChangeSetError> {
        for path in &paths {
            if let Some(reason) = malformed_reason(path) {
                return Err(ChangeSetError::InvalidPath {
                    path: path.clone(),
                    reason,
                });
            }
        }
        Ok(Self { paths })
    }

    /// The empty change set ("nothing changed").
    pub fn empty() -> Self {
        Self { paths: Vec::new() }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Why a path string is not a valid repository-relative path, or `None` if
/// it is fine.
fn malformed_reason(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path is empty");
    }
    if path.contains('\0') {
        return Some("path contains a NUL byte");
    }
    if path.starts_with('/') {
        return Some("path is absolute, expected repository-relative");
    }
    None
}
