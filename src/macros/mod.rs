//! Formatting shorthands for the chain builder.
//!
//! - [`macro@crate::new_error`] - creates a root error from `format!` arguments,
//!   optionally with a code.
//! - [`macro@crate::wrap`] - wraps an error from `format!` arguments and records
//!   the enclosing function's name next to file and line.
//! - [`macro@crate::function_name`] - the shortened path of the enclosing function.
//!
//! # Examples
//!
//! ```
//! use error_annotate::{new_error, wrap, ErrorCode};
//!
//! fn find(id: u32) -> error_annotate::ChainError {
//!     let root = new_error!(code = ErrorCode::NOT_FOUND, "no user {}", id);
//!     wrap!(root, "loading profile {}", id)
//! }
//!
//! let err = find(7);
//! assert_eq!(err.to_string(), "loading profile 7: no user 7");
//! assert!(err.call_site().unwrap().function.ends_with("find"));
//! ```

/// Creates a root [`ChainError`](crate::ChainError) from `format!` arguments.
///
/// A leading `code = <expr>,` attaches an [`ErrorCode`](crate::ErrorCode).
///
/// # Examples
///
/// ```
/// use error_annotate::{new_error, ErrorCode};
///
/// let plain = new_error!("Hello {}", "World");
/// assert_eq!(plain.to_string(), "Hello World");
/// assert_eq!(plain.error_code(), ErrorCode::NO_CODE);
///
/// let coded = new_error!(code = ErrorCode::BAD_REQUEST, "missing field `{}`", "name");
/// assert_eq!(coded.error_code(), ErrorCode::BAD_REQUEST);
/// ```
#[macro_export]
macro_rules! new_error {
    (code = $code:expr, $($arg:tt)+) => {
        $crate::ChainError::with_code($code, ::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::ChainError::new(::core::format_args!($($arg)+))
    };
}

/// Wraps an error, recording file, line and the enclosing function.
///
/// `wrap!(err)` adds only the call site, like
/// [`ChainError::with_stack`](crate::ChainError::with_stack).
/// `wrap!(err, "fmt", args..)` adds a formatted message. The error is taken
/// by value; use [`wrap`](fn@crate::wrap) for the `Option` form.
///
/// # Examples
///
/// ```
/// use error_annotate::wrap;
///
/// fn open() -> error_annotate::ChainError {
///     let io = std::io::Error::other("permission denied");
///     wrap!(io, "opening {}", "/etc/shadow")
/// }
///
/// let err = open();
/// assert_eq!(err.to_string(), "opening /etc/shadow: permission denied");
/// let site = err.call_site().unwrap();
/// assert_eq!(site.file, file!());
/// assert!(site.function.ends_with("open"));
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr $(,)?) => {
        $crate::Annotator::DEFAULT.with_stack_in($err, $crate::function_name!())
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::Annotator::DEFAULT.wrap_in($err, $crate::function_name!(), ::core::format_args!($($arg)+))
    };
}

/// Expands to the enclosing function's path, shortened to its last two
/// segments by [`short_function_name`](crate::types::short_function_name).
///
/// # Examples
///
/// ```
/// fn handler() -> &'static str {
///     error_annotate::function_name!()
/// }
///
/// assert!(handler().ends_with("handler"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        let name = ::core::any::type_name_of_val(&__here);
        $crate::types::short_function_name(name.strip_suffix("::__here").unwrap_or(name))
    }};
}
