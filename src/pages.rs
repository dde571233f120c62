//! Content path → page identifier mapping.
//!
//! A page identifier is the stable key the static site generator uses to
//! regenerate one page. For content files it is the repository-relative path
//! with the file extension stripped: `archive/2020/foo.md` → `archive/2020/foo`.
//! The generator owns the mapping from identifier to output file and URL.
//!
//! Only paths under a configured content root map to a page. Everything else
//! (CI config, tooling, READMEs) maps to nothing and is silently dropped by
//! Minimal mode — a changed workflow file has no page to rebuild.

use crate::category::under_root;

/// Map a changed path to the identifier of the page it renders to.
///
/// Returns `None` when no content root owns the path.
pub fn page_id<'a>(path: &str, mut content_roots: impl Iterator<Item = &'a str>) -> Option<String> {
    if content_roots.any(|root| under_root(path, root)) {
        Some(strip_extension(path))
    } else {
        None
    }
}

/// Remove the final extension from the last path segment.
///
/// Dotfiles keep their name (`archive/.gitignore` has no extension to strip),
/// and only the last extension goes (`a/b.tar.gz` → `a/b.tar`).
fn strip_extension(path: &str) -> String {
    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    match path[name_start..].rfind('.') {
        Some(0) | None => path.to_string(),
        Some(dot) => path[..name_start + dot].to_string(),
    }
}
