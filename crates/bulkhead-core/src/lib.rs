#![forbid(unsafe_code)]

//! Core: element tree, component model, and error taxonomy for Bulkhead.

pub mod caught;
pub mod component;
pub mod element;
pub mod error;
pub mod logging;

pub use caught::CaughtInfo;
pub use component::{Component, RenderCx, UNKNOWN_NAME};
pub use element::{Element, Node};
pub use error::{CapturedError, ConfigurationError};

// No-op logging macros used when the `tracing` feature is disabled.
// Call sites import them via `use crate::debug;` (etc.) so the same code
// compiles with and without the feature.

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
