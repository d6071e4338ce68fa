//! Plain, verbose and quoted renderings of an error chain.
//!
//! The renderers are [`Display`] adapters over any [`ChainNode`], so they
//! work for [`ChainError`](crate::ChainError) and for plain
//! `dyn core::error::Error` source chains alike.

use crate::traits::ChainNode;
use crate::types::alloc_type::{Cow, ToString};
use crate::walk::Chain;
use core::fmt::{self, Display};

/// Writes the non-empty parts joined by `": "`.
pub(crate) fn write_plain<'a>(
    f: &mut fmt::Formatter<'_>,
    parts: impl Iterator<Item = Cow<'a, str>>,
) -> fmt::Result {
    let mut first = true;
    for part in parts.filter(|part| !part.is_empty()) {
        if !first {
            f.write_str(": ")?;
        }
        f.write_str(&part)?;
        first = false;
    }
    Ok(())
}

/// Single-line rendering: `outer: middle: root`, empty messages skipped.
pub struct PlainFormat<'a, N: ?Sized> {
    error: &'a N,
}

impl<'a, N: ChainNode + ?Sized> PlainFormat<'a, N> {
    #[inline]
    pub fn new(error: &'a N) -> Self {
        Self { error }
    }
}

impl<N: ChainNode + ?Sized> Display for PlainFormat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(f, Chain::new(self.error).map(N::message))
    }
}

/// The plain rendering, quoted and escaped like a Rust string literal.
pub struct QuotedFormat<'a, N: ?Sized> {
    error: &'a N,
}

impl<'a, N: ChainNode + ?Sized> QuotedFormat<'a, N> {
    #[inline]
    pub fn new(error: &'a N) -> Self {
        Self { error }
    }
}

impl<N: ChainNode + ?Sized> Display for QuotedFormat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = PlainFormat::new(self.error).to_string();
        write!(f, "{:?}", plain)
    }
}

/// Switches for the verbose rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    /// Append ` (code: N)` to nodes carrying a code.
    pub show_code: bool,
    pub show_call_sites: bool,
    /// Append the first captured backtrace after the last node.
    pub show_backtrace: bool,
    /// Written in front of every node after the first.
    pub cause_marker: Cow<'static, str>,
    /// Written in front of call-site lines.
    pub indent: Cow<'static, str>,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            show_code: true,
            show_call_sites: true,
            show_backtrace: true,
            cause_marker: Cow::Borrowed("Caused by: "),
            indent: Cow::Borrowed("   "),
        }
    }
}

impl ErrorFormatConfig {
    /// Messages and markers only.
    #[inline]
    pub fn messages_only() -> Self {
        Self { show_code: false, show_call_sites: false, show_backtrace: false, ..Default::default() }
    }
}

/// Multi-line rendering, one block per node from outermost to innermost:
///
/// ```text
/// C
///    --- at src/lib.rs:12 (store::load) ---
/// Caused by: B
///    --- at src/lib.rs:8 ---
/// Caused by: A (code: 404)
/// ```
///
/// A node with an empty message contributes only its call-site line, and
/// the marker that would have introduced it is left out.
pub struct VerboseFormat<'a, N: ?Sized> {
    error: &'a N,
    config: ErrorFormatConfig,
}

impl<'a, N: ChainNode + ?Sized> VerboseFormat<'a, N> {
    #[inline]
    pub fn new(error: &'a N) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    #[inline]
    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    #[inline]
    pub fn show_call_sites(mut self, show: bool) -> Self {
        self.config.show_call_sites = show;
        self
    }

    #[inline]
    pub fn show_backtrace(mut self, show: bool) -> Self {
        self.config.show_backtrace = show;
        self
    }

    pub fn cause_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.config.cause_marker = marker.into();
        self
    }

    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.config.indent = indent.into();
        self
    }
}

/// Starts every write after the first on a fresh line.
struct Lines<'f, 'b> {
    f: &'f mut fmt::Formatter<'b>,
    started: bool,
}

impl Lines<'_, '_> {
    fn line(&mut self) -> Result<&mut Self, fmt::Error> {
        if self.started {
            self.f.write_str("\n")?;
        }
        self.started = true;
        Ok(self)
    }

    fn put(&mut self, s: &str) -> Result<&mut Self, fmt::Error> {
        self.f.write_str(s)?;
        Ok(self)
    }

    fn put_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self, fmt::Error> {
        self.f.write_fmt(args)?;
        Ok(self)
    }
}

impl<N: ChainNode + ?Sized> Display for VerboseFormat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        let mut out = Lines { f, started: false };

        for (depth, node) in Chain::new(self.error).enumerate() {
            let message = node.message();
            let code = node.code().filter(|_| config.show_code);

            if !message.is_empty() || code.is_some() {
                let line = out.line()?;
                if depth > 0 {
                    line.put(&config.cause_marker)?;
                }
                line.put(&message)?;
                if let Some(code) = code {
                    let sep = if message.is_empty() { "" } else { " " };
                    line.put_fmt(format_args!("{sep}(code: {code})"))?;
                }
            }

            if config.show_call_sites {
                if let Some(site) = node.call_site() {
                    out.line()?.put(&config.indent)?.put_fmt(format_args!("--- at {site} ---"))?;
                }
            }
        }

        self.write_backtrace(&mut out)
    }
}

impl<N: ChainNode + ?Sized> VerboseFormat<'_, N> {
    #[cfg(feature = "std")]
    fn write_backtrace(&self, out: &mut Lines<'_, '_>) -> fmt::Result {
        if !self.config.show_backtrace {
            return Ok(());
        }
        if let Some(backtrace) = Chain::new(self.error).find_map(N::backtrace) {
            out.line()?.put("Stack backtrace:")?;
            out.line()?.put_fmt(format_args!("{backtrace}"))?;
        }
        Ok(())
    }

    #[cfg(not(feature = "std"))]
    fn write_backtrace(&self, _out: &mut Lines<'_, '_>) -> fmt::Result {
        Ok(())
    }
}
