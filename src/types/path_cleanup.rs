//! Shortening of captured source paths.
//!
//! Paths reported by [`core::panic::Location`] are relative to the package
//! root for local crates but absolute for crates built out of a registry or
//! a vendored checkout. [`PathCleanup`] rewrites them into something worth
//! printing. It is an explicit value carried by an
//! [`Annotator`](crate::Annotator), never process-wide state.

#[cfg(feature = "std")]
use std::{cmp::Reverse, env, path::PathBuf, vec::Vec};

/// Environment variable consulted by [`PathCleanup::search_path`].
pub const DEFAULT_SEARCH_PATH_VAR: &str = "ERROR_ANNOTATE_PATH";

const SEPARATORS: [char; 2] = ['/', '\\'];

/// How captured file paths are rewritten before they are stored.
///
/// # Examples
///
/// ```
/// use error_annotate::PathCleanup;
///
/// let cleanup = PathCleanup::StripPrefix("/home/dev/project");
/// assert_eq!(cleanup.apply("/home/dev/project/src/db.rs"), "src/db.rs");
/// assert_eq!(cleanup.apply("/opt/other/src/db.rs"), "/opt/other/src/db.rs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathCleanup {
    /// Store the path exactly as the compiler reported it.
    #[default]
    Keep,
    /// Make paths relative to one fixed directory.
    StripPrefix(&'static str),
    /// Make paths relative to the longest matching entry of a path-list
    /// environment variable (`:`-separated on Unix, `;` on Windows).
    #[cfg(feature = "std")]
    SearchPathEnv(&'static str),
}

impl PathCleanup {
    /// Cleanup driven by [`DEFAULT_SEARCH_PATH_VAR`].
    #[cfg(feature = "std")]
    #[inline]
    pub const fn search_path() -> Self {
        Self::SearchPathEnv(DEFAULT_SEARCH_PATH_VAR)
    }

    /// Rewrites `file`. Paths that match nothing come back unchanged.
    pub fn apply(&self, file: &'static str) -> &'static str {
        match *self {
            Self::Keep => file,
            Self::StripPrefix(dir) => relative_to(file, dir).unwrap_or(file),
            #[cfg(feature = "std")]
            Self::SearchPathEnv(var) => relative_to_search_path(file, var),
        }
    }
}

/// Returns `file` relative to `dir`, only when `dir` ends on a path
/// component boundary of `file`. Never produces `..` segments.
fn relative_to(file: &'static str, dir: &str) -> Option<&'static str> {
    let dir = dir.trim_end_matches(SEPARATORS);
    if dir.is_empty() {
        return None;
    }
    let rest = file.strip_prefix(dir)?.strip_prefix(SEPARATORS)?;
    let rest = rest.trim_start_matches(SEPARATORS);
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

#[cfg(feature = "std")]
fn relative_to_search_path(file: &'static str, var: &str) -> &'static str {
    let Some(value) = env::var_os(var) else {
        return file;
    };

    let mut dirs: Vec<PathBuf> = env::split_paths(&value)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();
    // stable: equal-length entries keep their listed order
    dirs.sort_by_key(|dir| Reverse(dir.as_os_str().len()));

    dirs.iter()
        .filter_map(|dir| dir.to_str())
        .find_map(|dir| relative_to(file, dir))
        .unwrap_or(file)
}
