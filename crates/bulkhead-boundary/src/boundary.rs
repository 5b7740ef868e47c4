#![forbid(unsafe_code)]

//! The error boundary state machine.
//!
//! # Design
//!
//! [`ErrorBoundary`] wraps a child component and renders it while healthy.
//! When the child's render raises, the boundary captures the error, stores
//! it, and substitutes the configured fallback presentation in the same
//! pass. Capture and notification are two separate host hooks:
//! [`ErrorBoundary::capture_error`] derives the new state purely, and
//! [`ErrorBoundary::notify_caught`] performs the `on_error` side effect.
//! During a render the notification is queued on the context and delivered
//! by the host after the pass commits.
//!
//! The boundary's state lives behind a shared single-threaded cell so the
//! reset handle handed to fallback strategies keeps a stable identity for
//! the boundary's whole lifetime.
//!
//! # Invariants
//!
//! 1. The stored error is `Some` exactly while the fallback is displayed;
//!    healthy output is exactly the child's output.
//! 2. There is no failed-to-failed transition: children are not rendered
//!    while failed, and an error raised by the fallback itself escalates
//!    out of the boundary with the stored error unchanged.
//! 3. `on_error` fires exactly once per captured error, after commit.
//! 4. `on_reset` fires before the stored error is cleared, on both the
//!    manual and the reset-key path.
//! 5. Fallback precedence is `fallback`, then `fallback_render`, then
//!    `fallback_component`; none configured raises [`ConfigurationError`]
//!    through the normal error channel.
//!
//! # Failure Modes
//!
//! - **Fallback raises**: the error propagates to the ancestor boundary or
//!   the host; this boundary keeps displaying nothing for the pass and its
//!   stored error is unchanged.
//! - **No strategy configured**: every failed pass raises
//!   [`ConfigurationError`]; the boundary never silently renders empty.

use std::cell::RefCell;
use std::rc::Rc;

use bulkhead_core::{CapturedError, CaughtInfo, Component, ConfigurationError, Element, RenderCx};

use crate::fallback::{
    FallbackComponent, FallbackConfiguration, FallbackContext, FallbackRenderFn, FallbackStrategy,
    OnError, OnReset,
};
use crate::reset::{ResetHandle, ResetKey, keys_changed};

/// The boundary's only persisted state.
#[derive(Debug, Clone, Default)]
pub struct ErrorState {
    error: Option<CapturedError>,
}

impl ErrorState {
    /// The initial, healthy state.
    #[must_use]
    pub fn healthy() -> Self {
        Self { error: None }
    }

    /// A failed state holding the captured error.
    #[must_use]
    pub fn failed(error: CapturedError) -> Self {
        Self { error: Some(error) }
    }

    /// Whether a fallback should be displayed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// The captured error, while failed.
    #[must_use]
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }
}

/// Shared interior for one boundary: state plus the observer callbacks.
///
/// Callbacks are taken out of the cell for the duration of their invocation
/// so a callback that reaches back into the boundary (through a stashed
/// reset handle) never trips a borrow conflict or re-fires itself.
pub(crate) struct BoundaryCell {
    pub(crate) state: ErrorState,
    pub(crate) on_error: Option<OnError>,
    pub(crate) on_reset: Option<OnReset>,
}

impl BoundaryCell {
    pub(crate) fn new(
        on_error: Option<OnError>,
        on_reset: Option<OnReset>,
    ) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            state: ErrorState::healthy(),
            on_error,
            on_reset,
        }))
    }

    /// Fire `on_reset` (if configured), then clear the stored error.
    pub(crate) fn reset(cell: &Rc<RefCell<Self>>) {
        #[cfg(feature = "tracing")]
        let was_failed = cell.borrow().state.is_failed();
        let callback = cell.borrow_mut().on_reset.take();
        if let Some(mut callback) = callback {
            callback();
            cell.borrow_mut().on_reset = Some(callback);
        }
        cell.borrow_mut().state = ErrorState::healthy();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "boundary.reset", was_failed);
    }

    /// Fire `on_error` for a captured error.
    pub(crate) fn notify(cell: &Rc<RefCell<Self>>, error: &CapturedError, info: &CaughtInfo) {
        let callback = cell.borrow_mut().on_error.take();
        if let Some(mut callback) = callback {
            callback(error, info);
            cell.borrow_mut().on_error = Some(callback);
        }
    }
}

/// A stateful wrapper that isolates failures in its child subtree.
///
/// While healthy, renders the child; while failed, renders the configured
/// fallback. See the module docs for the full contract.
pub struct ErrorBoundary<C> {
    child: C,
    fallback: Option<Element>,
    fallback_render: Option<FallbackRenderFn>,
    fallback_component: Option<Box<dyn FallbackComponent>>,
    reset_keys: Option<Vec<ResetKey>>,
    prev_keys: Option<Vec<ResetKey>>,
    cell: Rc<RefCell<BoundaryCell>>,
}

impl<C: Component> ErrorBoundary<C> {
    /// Wrap a child with no fallback configured.
    ///
    /// Such a boundary raises [`ConfigurationError`] if it ever fails;
    /// useful only when an ancestor boundary is meant to take over.
    #[must_use]
    pub fn new(child: C) -> Self {
        Self::with_config(child, FallbackConfiguration::new())
    }

    /// Wrap a child with the given configuration.
    #[must_use]
    pub fn with_config(child: C, config: FallbackConfiguration) -> Self {
        let FallbackConfiguration {
            fallback,
            fallback_render,
            fallback_component,
            on_error,
            on_reset,
            reset_keys,
        } = config;
        Self {
            child,
            fallback,
            fallback_render,
            fallback_component,
            reset_keys,
            prev_keys: None,
            cell: BoundaryCell::new(on_error, on_reset),
        }
    }

    /// Pure capture hook: derive the state a boundary enters when the given
    /// error reaches it. Touches nothing.
    #[must_use]
    pub fn capture_error(error: &CapturedError) -> ErrorState {
        ErrorState::failed(error.clone())
    }

    /// Side-effecting notification hook: deliver a captured error to the
    /// `on_error` observer.
    ///
    /// During normal rendering this is queued on the [`RenderCx`] and runs
    /// once the host commits the pass; a host integrating the boundary
    /// directly may also call it itself.
    pub fn notify_caught(&self, error: &CapturedError, info: &CaughtInfo) {
        BoundaryCell::notify(&self.cell, error, info);
    }

    /// Whether the boundary is currently displaying a fallback.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.cell.borrow().state.is_failed()
    }

    /// The captured error, while failed.
    #[must_use]
    pub fn error(&self) -> Option<CapturedError> {
        self.cell.borrow().state.error().cloned()
    }

    /// The wrapped child.
    #[must_use]
    pub fn child(&self) -> &C {
        &self.child
    }

    /// Mutable access to the wrapped child, for reconfiguring it between
    /// passes.
    pub fn child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    /// Reset manually: fire `on_reset`, then clear the stored error.
    ///
    /// Equivalent to the handle handed to fallback strategies.
    pub fn reset(&mut self) {
        BoundaryCell::reset(&self.cell);
    }

    /// Replace the reset keys for the next pass.
    pub fn set_reset_keys(&mut self, keys: impl IntoIterator<Item = ResetKey>) {
        self.reset_keys = Some(keys.into_iter().collect());
    }

    /// Resolve the fallback option honored while failed.
    ///
    /// Precedence: `fallback`, then `fallback_render`, then
    /// `fallback_component`. With none configured, this is the
    /// configuration error the next failed pass raises.
    pub fn fallback_strategy(&mut self) -> Result<FallbackStrategy<'_>, ConfigurationError> {
        if let Some(element) = &self.fallback {
            return Ok(FallbackStrategy::Static(element));
        }
        if let Some(render) = &self.fallback_render {
            return Ok(FallbackStrategy::Render(render));
        }
        if let Some(component) = &mut self.fallback_component {
            return Ok(FallbackStrategy::Component(component.as_mut()));
        }
        Err(ConfigurationError)
    }

    /// Reset-key comparison, performed at the top of every pass.
    ///
    /// Transitions only while failed; the snapshot is refreshed on every
    /// pass, so a key change observed during a healthy pass is absorbed
    /// without side effects.
    fn check_reset_keys(&mut self) {
        let failed = self.cell.borrow().state.is_failed();
        if failed && let Some(prev) = &self.prev_keys {
            let next = self.reset_keys.as_deref().unwrap_or_default();
            if keys_changed(prev, next) {
                #[cfg(feature = "tracing")]
                log_auto_reset(prev.len(), next.len());
                BoundaryCell::reset(&self.cell);
            }
        }
        self.prev_keys = Some(self.reset_keys.clone().unwrap_or_default());
    }

    fn render_fallback(&mut self, error: &CapturedError) -> Result<Element, CapturedError> {
        let reset = ResetHandle::new(Rc::clone(&self.cell));
        match self.fallback_strategy() {
            Ok(FallbackStrategy::Static(element)) => Ok(element.clone()),
            Ok(FallbackStrategy::Render(render)) => render(FallbackContext::new(error, reset)),
            Ok(FallbackStrategy::Component(component)) => {
                component.render(FallbackContext::new(error, reset))
            }
            Err(missing) => Err(missing.into()),
        }
    }
}

impl<C: Component> Component for ErrorBoundary<C> {
    fn name(&self) -> Option<&str> {
        Some("ErrorBoundary")
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError> {
        self.check_reset_keys();
        let stored = self.cell.borrow().state.error().cloned();
        match stored {
            Some(error) => self.render_fallback(&error),
            None => match cx.render_child(&mut self.child) {
                Ok(element) => Ok(element),
                Err(error) => {
                    self.cell.borrow_mut().state = Self::capture_error(&error);
                    let info = cx.take_caught_info();
                    #[cfg(feature = "tracing")]
                    log_capture(&error, &info);
                    let cell = Rc::clone(&self.cell);
                    let queued = error.clone();
                    cx.after_commit(move || BoundaryCell::notify(&cell, &queued, &info));
                    self.render_fallback(&error)
                }
            },
        }
    }
}

#[cfg(feature = "tracing")]
fn log_capture(error: &CapturedError, info: &CaughtInfo) {
    tracing::debug!(message = "boundary.capture", error = %error, depth = info.depth());
}

#[cfg(feature = "tracing")]
fn log_auto_reset(prev: usize, next: usize) {
    tracing::debug!(message = "boundary.auto_reset", prev, next);
}
