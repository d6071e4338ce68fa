//! The chain builder and its configuration.

use crate::traits::IntoChainError;
use crate::types::alloc_type::{Box, String, ToString};
use crate::types::{AnnotatedError, CallSite, ChainError, ErrorCode, PathCleanup};
use core::fmt::Display;
#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// When [`Annotator::with_stack`] records a full backtrace in addition to
/// its call site.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BacktraceCapture {
    /// Never.
    #[default]
    Never,
    /// When `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` enable it.
    Env,
    /// Always, regardless of the environment.
    Always,
}

/// Settings an [`Annotator`] applies to every node it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub path_cleanup: PathCleanup,
    /// When `false`, annotations carry a message and code only.
    pub capture_call_sites: bool,
    #[cfg(feature = "std")]
    pub backtrace: BacktraceCapture,
}

impl AnnotatorConfig {
    pub const fn new() -> Self {
        Self {
            path_cleanup: PathCleanup::Keep,
            capture_call_sites: true,
            #[cfg(feature = "std")]
            backtrace: BacktraceCapture::Never,
        }
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds annotated chains with a fixed configuration.
///
/// The free functions ([`wrap`](crate::wrap), [`with_stack`](crate::with_stack), ...)
/// and the [`ResultExt`](crate::ResultExt) methods use [`Annotator::DEFAULT`].
/// Construct your own to shorten paths or record backtraces:
///
/// ```
/// use error_annotate::{Annotator, ChainError, PathCleanup};
///
/// const ANNOTATE: Annotator = Annotator::DEFAULT.path_cleanup(PathCleanup::StripPrefix("src"));
///
/// let err = ANNOTATE.wrap(ChainError::new("disk full"), "saving snapshot");
/// let site = err.call_site().unwrap();
/// assert_eq!(site.line, line!() - 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotator {
    config: AnnotatorConfig,
}

impl Annotator {
    pub const DEFAULT: Annotator = Annotator::new();

    #[inline]
    pub const fn new() -> Self {
        Self { config: AnnotatorConfig::new() }
    }

    #[inline]
    pub const fn with_config(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn path_cleanup(self, path_cleanup: PathCleanup) -> Self {
        let mut config = self.config;
        config.path_cleanup = path_cleanup;
        Self { config }
    }

    #[inline]
    pub const fn capture_call_sites(self, enabled: bool) -> Self {
        let mut config = self.config;
        config.capture_call_sites = enabled;
        Self { config }
    }

    #[cfg(feature = "std")]
    #[inline]
    pub const fn backtrace(self, backtrace: BacktraceCapture) -> Self {
        let mut config = self.config;
        config.backtrace = backtrace;
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Wraps `err` with `message`. An empty message only adds a call site.
    #[track_caller]
    #[inline]
    pub fn wrap(&self, err: impl IntoChainError, message: impl Display) -> ChainError {
        self.annotate(err.into_chain_error(), message.to_string(), None, "", false)
    }

    /// Like [`wrap`](Self::wrap), naming the calling function. Used by [`wrap!`](crate::wrap!).
    #[track_caller]
    #[inline]
    pub fn wrap_in(
        &self,
        err: impl IntoChainError,
        function: &'static str,
        message: impl Display,
    ) -> ChainError {
        self.annotate(err.into_chain_error(), message.to_string(), None, function, false)
    }

    #[track_caller]
    #[inline]
    pub fn wrap_with_code(
        &self,
        err: impl IntoChainError,
        code: impl Into<ErrorCode>,
        message: impl Display,
    ) -> ChainError {
        let code = code.into().explicit();
        self.annotate(err.into_chain_error(), message.to_string(), code, "", false)
    }

    /// Adds a message-less annotation: call site, plus a backtrace when configured.
    #[track_caller]
    #[inline]
    pub fn with_stack(&self, err: impl IntoChainError) -> ChainError {
        self.annotate(err.into_chain_error(), String::new(), None, "", true)
    }

    #[track_caller]
    #[inline]
    pub fn with_stack_in(&self, err: impl IntoChainError, function: &'static str) -> ChainError {
        self.annotate(err.into_chain_error(), String::new(), None, function, true)
    }

    /// The single point where the caller's location is read.
    #[track_caller]
    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn annotate(
        &self,
        underlying: ChainError,
        message: String,
        code: Option<ErrorCode>,
        function: &'static str,
        stack: bool,
    ) -> ChainError {
        // no closures here: they would not forward the caller location
        let site = if self.config.capture_call_sites {
            Some(CallSite::capture_in(&self.config.path_cleanup, function))
        } else {
            None
        };

        ChainError::Annotated(AnnotatedError {
            message,
            code,
            site,
            underlying: Box::new(underlying),
            #[cfg(feature = "std")]
            stack: if stack { self.capture_backtrace() } else { None },
        })
    }

    #[cfg(feature = "std")]
    fn capture_backtrace(&self) -> Option<Backtrace> {
        match self.config.backtrace {
            BacktraceCapture::Never => None,
            BacktraceCapture::Env => Some(Backtrace::capture()),
            BacktraceCapture::Always => Some(Backtrace::force_capture()),
        }
    }
}
