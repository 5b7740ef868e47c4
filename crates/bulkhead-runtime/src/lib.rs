#![forbid(unsafe_code)]

//! Runtime: single-threaded render host and error relay for Bulkhead.
//!
//! [`RenderHost`] drives render passes over a component tree and owns the
//! commit contract: a pass that raises past every boundary commits nothing
//! and runs no queued effects. [`ErrorRelay`] carries failures raised by
//! after-commit work back into the next render pass, where the nearest
//! boundary can capture them.

pub mod host;
pub mod relay;

pub use host::RenderHost;
pub use relay::ErrorRelay;
