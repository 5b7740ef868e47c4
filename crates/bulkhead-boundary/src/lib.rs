#![forbid(unsafe_code)]

//! Error boundaries: catch render errors from a subtree and substitute a
//! caller-supplied fallback presentation, with manual and key-driven reset.

pub mod boundary;
pub mod fallback;
pub mod reset;
pub mod wrap;

pub use boundary::{ErrorBoundary, ErrorState};
pub use fallback::{
    FallbackComponent, FallbackConfiguration, FallbackContext, FallbackRenderFn, FallbackStrategy,
};
pub use reset::{ResetHandle, ResetKey, keys_changed};
pub use wrap::{WithErrorBoundary, with_error_boundary};
