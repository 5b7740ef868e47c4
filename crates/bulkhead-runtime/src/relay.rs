#![forbid(unsafe_code)]

//! Error relay: a hand-off slot for failures raised outside the render path.
//!
//! # Design
//!
//! After-commit work has no boundary above it; an error raised there has
//! nowhere to propagate. The relay gives it somewhere to land: the effect
//! calls [`ErrorRelay::report`], and a component inside the tree calls
//! [`ErrorRelay::check`] at the top of its render, re-raising the failure
//! through the normal channel where the nearest boundary captures it.
//!
//! The slot holds one error. Reporting over an undelivered error replaces
//! it; the latest failure is what the next pass shows.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bulkhead_core::CapturedError;

/// A shared one-error slot connecting after-commit work to the render path.
///
/// Clones share the slot, so one half can live in an effect closure while
/// the other sits in the component that re-raises.
#[derive(Clone, Default)]
pub struct ErrorRelay {
    slot: Rc<RefCell<Option<CapturedError>>>,
}

impl ErrorRelay {
    /// An empty relay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit a failure for the next render pass. Latest report wins.
    pub fn report(&self, error: impl Into<CapturedError>) {
        let error = error.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "relay.report",
            error = %error,
            replaced = self.slot.borrow().is_some()
        );
        *self.slot.borrow_mut() = Some(error);
    }

    /// Re-raise the pending failure, if any.
    ///
    /// Intended for the top of a component's render: `relay.check()?;`
    /// drains the slot and sends the error toward the nearest boundary.
    pub fn check(&self) -> Result<(), CapturedError> {
        match self.slot.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Drain the pending failure without raising it.
    pub fn take(&self) -> Option<CapturedError> {
        self.slot.borrow_mut().take()
    }

    /// Whether a failure is waiting for delivery.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl fmt::Debug for ErrorRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRelay")
            .field("pending", &self.pending())
            .finish()
    }
}
