#![forbid(unsafe_code)]

//! Fallback configuration and the strategy chosen while failed.
//!
//! A boundary owner supplies up to three presentations through
//! [`FallbackConfiguration`]; while failed, exactly one is honored, in a
//! fixed precedence order:
//!
//! 1. `fallback` — a precomputed [`Element`], shown as-is,
//! 2. `fallback_render` — a function from the failure to a presentation,
//! 3. `fallback_component` — a reusable [`FallbackComponent`].
//!
//! The chosen option surfaces as a [`FallbackStrategy`] so the render path
//! matches on it exhaustively; configuring none of the three is a
//! configuration error raised through the normal error channel.

use std::fmt;

use bulkhead_core::{CapturedError, CaughtInfo, Element};

use crate::reset::{ResetHandle, ResetKey};

/// Boxed `fallback_render` function.
pub type FallbackRenderFn = Box<dyn Fn(FallbackContext<'_>) -> Result<Element, CapturedError>>;

pub(crate) type OnError = Box<dyn FnMut(&CapturedError, &CaughtInfo)>;
pub(crate) type OnReset = Box<dyn FnMut()>;

/// What a fallback presentation gets to see: the failure, and (when rendered
/// by a boundary) the reset handle.
///
/// The handle is handed to fallback strategies only, never to the wrapped
/// children. A context without a handle is the degraded form used when a
/// fallback component is rendered outside any boundary.
pub struct FallbackContext<'a> {
    error: &'a CapturedError,
    reset: Option<ResetHandle>,
}

impl<'a> FallbackContext<'a> {
    pub(crate) fn new(error: &'a CapturedError, reset: ResetHandle) -> Self {
        Self {
            error,
            reset: Some(reset),
        }
    }

    /// Degraded context carrying only the error, with no reset affordance.
    #[must_use]
    pub fn error_only(error: &'a CapturedError) -> Self {
        Self { error, reset: None }
    }

    /// The failure being presented.
    #[must_use]
    pub fn error(&self) -> &CapturedError {
        self.error
    }

    /// Reset handle for the owning boundary, when one exists.
    #[must_use]
    pub fn reset_handle(&self) -> Option<&ResetHandle> {
        self.reset.as_ref()
    }

    /// Whether a reset affordance should be offered.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.reset.is_some()
    }
}

impl fmt::Debug for FallbackContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackContext")
            .field("error", &self.error)
            .field("can_reset", &self.can_reset())
            .finish()
    }
}

/// A reusable fallback presentation.
///
/// Must render a meaningful element from the degraded context too: a
/// component may be instantiated outside any boundary, in which case
/// [`FallbackContext::can_reset`] is false.
pub trait FallbackComponent {
    /// Diagnostic name, mirroring [`bulkhead_core::Component::name`].
    fn name(&self) -> Option<&str> {
        None
    }

    /// Produce the fallback presentation for the given failure.
    fn render(&mut self, ctx: FallbackContext<'_>) -> Result<Element, CapturedError>;
}

/// Caller-supplied boundary configuration.
///
/// All fields are optional; more than one fallback option may be set, but
/// only the highest-priority one is ever honored.
#[derive(Default)]
pub struct FallbackConfiguration {
    pub(crate) fallback: Option<Element>,
    pub(crate) fallback_render: Option<FallbackRenderFn>,
    pub(crate) fallback_component: Option<Box<dyn FallbackComponent>>,
    pub(crate) on_error: Option<OnError>,
    pub(crate) on_reset: Option<OnReset>,
    pub(crate) reset_keys: Option<Vec<ResetKey>>,
}

impl FallbackConfiguration {
    /// Empty configuration. A boundary built from this raises a
    /// configuration error if it ever fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Static fallback element, shown as-is. Highest precedence.
    #[must_use]
    pub fn fallback(mut self, element: Element) -> Self {
        self.fallback = Some(element);
        self
    }

    /// Fallback function, invoked with the failure on every failed pass.
    #[must_use]
    pub fn fallback_render<F>(mut self, render: F) -> Self
    where
        F: Fn(FallbackContext<'_>) -> Result<Element, CapturedError> + 'static,
    {
        self.fallback_render = Some(Box::new(render));
        self
    }

    /// Reusable fallback component. Lowest precedence.
    #[must_use]
    pub fn fallback_component<C>(mut self, component: C) -> Self
    where
        C: FallbackComponent + 'static,
    {
        self.fallback_component = Some(Box::new(component));
        self
    }

    /// Observer invoked once per captured error, after the pass that
    /// displays the fallback has been committed.
    #[must_use]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: FnMut(&CapturedError, &CaughtInfo) + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    /// Observer invoked once per reset, before the stored error is cleared.
    #[must_use]
    pub fn on_reset<F>(mut self, on_reset: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_reset = Some(Box::new(on_reset));
        self
    }

    /// Reset keys compared by identity between passes; any change while
    /// failed resets the boundary.
    #[must_use]
    pub fn reset_keys(mut self, keys: impl IntoIterator<Item = ResetKey>) -> Self {
        self.reset_keys = Some(keys.into_iter().collect());
        self
    }
}

impl fmt::Debug for FallbackConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackConfiguration")
            .field("fallback", &self.fallback.is_some())
            .field("fallback_render", &self.fallback_render.is_some())
            .field("fallback_component", &self.fallback_component.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .field("reset_keys", &self.reset_keys.as_ref().map(Vec::len))
            .finish()
    }
}

/// The single fallback option a failed boundary resolved to.
pub enum FallbackStrategy<'a> {
    /// Precomputed element, cloned into the output unchanged.
    Static(&'a Element),
    /// Render function, called with the failure.
    Render(&'a FallbackRenderFn),
    /// Fallback component, rendered with the failure.
    Component(&'a mut dyn FallbackComponent),
}

impl fmt::Debug for FallbackStrategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(element) => f.debug_tuple("Static").field(element).finish(),
            Self::Render(_) => f.write_str("Render"),
            Self::Component(_) => f.write_str("Component"),
        }
    }
}
