//! Change-set provider: reads changed paths from git.
//!
//! The classifier itself does no I/O; this module is the bridge from a
//! content repository to a list of changed paths. It shells out to
//! `git diff --name-only -z <from> <to>` and parses the NUL-separated
//! output. `-z` matters twice over: NUL can't appear in a path, and it
//! disables git's quoting of non-ASCII filenames, so paths arrive verbatim.
//!
//! Renames, deletions, and additions all surface as plain changed paths —
//! exactly what the classifier needs. A deleted article still means its page
//! (and, if high-impact, the listing pages) must be regenerated.

use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git diff failed ({status}): {stderr}")]
    Git {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Paths that differ between two revisions of the repository at `repo`.
///
/// `from` and `to` are anything `git rev-parse` accepts (hashes, refs,
/// `HEAD~3`, ...). Paths are returned repository-relative, as git emits them.
pub fn changed_paths(repo: &Path, from: &str, to: &str) -> Result<Vec<String>, DiffError> {
    let output = Command::new("git")
        .args(["diff", "--name-only", "-z", from, to])
        .current_dir(repo)
        .output()?;

    if !output.status.success() {
        return Err(DiffError::Git {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(parse_name_only(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse NUL-separated `git diff --name-only -z` output into paths.
///
/// The output ends with a trailing NUL; empty fields are skipped so both the
/// trailing separator and a fully empty diff parse cleanly.
pub fn parse_name_only(raw: &str) -> Vec<String> {
    raw.split('\0')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
