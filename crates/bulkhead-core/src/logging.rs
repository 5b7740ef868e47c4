#![forbid(unsafe_code)]

//! Tracing macro re-exports, active when the `tracing` feature is enabled.
//!
//! Call sites pair this with the no-op fallbacks exported at the crate root:
//!
//! ```ignore
//! #[cfg(feature = "tracing")]
//! use bulkhead_core::logging::debug;
//! #[cfg(not(feature = "tracing"))]
//! use bulkhead_core::debug;
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};
