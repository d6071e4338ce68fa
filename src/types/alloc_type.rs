//! `std`/`alloc` switch for the owned types used across the crate.

#[cfg(feature = "std")]
pub use std::boxed::Box;
#[cfg(not(feature = "std"))]
pub use alloc::boxed::Box;

#[cfg(feature = "std")]
pub use std::string::{String, ToString};
#[cfg(not(feature = "std"))]
pub use alloc::string::{String, ToString};

#[cfg(feature = "std")]
pub use std::borrow::Cow;
#[cfg(not(feature = "std"))]
pub use alloc::borrow::Cow;
