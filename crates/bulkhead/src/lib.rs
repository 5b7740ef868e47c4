#![forbid(unsafe_code)]

//! Bulkhead public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users.

pub mod prelude {
    pub use bulkhead_boundary as boundary;
    pub use bulkhead_core as core;
    #[cfg(feature = "runtime")]
    pub use bulkhead_runtime as runtime;
}
