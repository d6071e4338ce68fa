//! Caller location captured when an annotation is added.

use crate::types::PathCleanup;
use core::fmt;
use core::panic::Location;
#[cfg(feature = "serde")]
use serde::Serialize;

/// File, function and line of the code that annotated an error.
///
/// Captured through `#[track_caller]`: every function between a public
/// entry point and [`CallSite::capture_in`] carries the attribute, so the
/// recorded location is the caller of the entry point. `function` is empty
/// unless the entry point was a macro able to name its enclosing function
/// (see [`function_name!`](crate::function_name)).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// Captures the caller's location without a function name.
    ///
    /// ```
    /// use error_annotate::{CallSite, PathCleanup};
    ///
    /// let site = CallSite::capture(&PathCleanup::Keep);
    /// assert_eq!(site.line, line!() - 1);
    /// assert_eq!(site.file, file!());
    /// ```
    #[track_caller]
    #[inline]
    pub fn capture(cleanup: &PathCleanup) -> Self {
        Self::capture_in(cleanup, "")
    }

    /// Captures the caller's location and records `function` as its name.
    #[track_caller]
    pub fn capture_in(cleanup: &PathCleanup, function: &'static str) -> Self {
        let location = Location::caller();
        Self {
            file: cleanup.apply(location.file()),
            function,
            line: location.line(),
            column: location.column(),
        }
    }

    #[inline]
    pub fn has_function(&self) -> bool {
        !self.function.is_empty()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if self.has_function() {
            write!(f, " ({})", self.function)?;
        }
        Ok(())
    }
}

/// Shortens a fully qualified function path to its last two segments
/// (`module::function` or `Type::method`), dropping closure suffixes.
///
/// ```
/// use error_annotate::types::short_function_name;
///
/// assert_eq!(short_function_name("app::store::Store::load"), "Store::load");
/// assert_eq!(short_function_name("app::run::{{closure}}"), "app::run");
/// assert_eq!(short_function_name("main"), "main");
/// ```
pub fn short_function_name(full: &'static str) -> &'static str {
    let mut name = full;
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    match name.rmatch_indices("::").nth(1) {
        Some((idx, _)) => &name[idx + 2..],
        None => name,
    }
}
