//! Tracing integration: one structured event per reported chain.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-annotate = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! Nothing here creates spans or installs a subscriber; events go to
//! whatever the application has set up.

use crate::types::ChainError;

/// Emits annotated errors as `tracing` events.
///
/// # Example
///
/// ```rust,ignore
/// use error_annotate::prelude::*;
///
/// fn sync_account(id: u64) -> ChainResult<()> {
///     fetch_remote(id)
///         .wrap_err_with(|| format!("syncing account {id}"))
///         .trace_err()
/// }
/// ```
pub trait TraceExt {
    /// Logs the error side at `ERROR` level and passes `self` through.
    fn trace_err(self) -> Self;
}

impl<T> TraceExt for Result<T, ChainError> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(err) = &self {
            err.trace();
        }
        self
    }
}

impl ChainError {
    /// Emits one `ERROR` event carrying the code, the outermost call site,
    /// the root cause's message and the verbose dump.
    pub fn trace(&self) {
        let site = self.call_site();
        let cause = self.root_cause().message();
        tracing::error!(
            code = self.error_code().value(),
            file = site.map(|site| site.file),
            line = site.map(|site| site.line),
            function = site.map(|site| site.function).filter(|name| !name.is_empty()),
            cause = %cause,
            "{:#}",
            self
        );
    }
}
