#![forbid(unsafe_code)]

//! Convenience wrapper that bakes a boundary around an existing component.
//!
//! [`with_error_boundary`] is for call sites that want failure isolation
//! without spelling out the boundary themselves. The wrapper derives its
//! display name from the wrapped component, so raise-site descriptions and
//! debugging output stay attributable: wrapping `Profile` yields
//! `withErrorBoundary(Profile)`; components with no declared name yield
//! `withErrorBoundary(Unknown)`.

use bulkhead_core::{CapturedError, Component, Element, RenderCx, UNKNOWN_NAME};

use crate::boundary::ErrorBoundary;
use crate::fallback::FallbackConfiguration;

/// A named component wrapping a child in an [`ErrorBoundary`].
pub struct WithErrorBoundary<C> {
    name: String,
    boundary: ErrorBoundary<C>,
}

/// Wrap `child` in a boundary configured with `config`.
#[must_use]
pub fn with_error_boundary<C: Component>(
    child: C,
    config: FallbackConfiguration,
) -> WithErrorBoundary<C> {
    let name = format!(
        "withErrorBoundary({})",
        child.name().unwrap_or(UNKNOWN_NAME)
    );
    WithErrorBoundary {
        name,
        boundary: ErrorBoundary::with_config(child, config),
    }
}

impl<C: Component> WithErrorBoundary<C> {
    /// The wrapped boundary.
    #[must_use]
    pub fn boundary(&self) -> &ErrorBoundary<C> {
        &self.boundary
    }

    /// Mutable access to the wrapped boundary, for resets and key updates.
    pub fn boundary_mut(&mut self) -> &mut ErrorBoundary<C> {
        &mut self.boundary
    }
}

impl<C: Component> Component for WithErrorBoundary<C> {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError> {
        cx.render_child(&mut self.boundary)
    }
}
