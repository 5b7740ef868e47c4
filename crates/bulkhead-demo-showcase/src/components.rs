#![forbid(unsafe_code)]

//! Components shared by the demo screens.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bulkhead_boundary::{FallbackComponent, FallbackContext, ResetHandle};
use bulkhead_core::{CapturedError, Component, Element, Node, RenderCx};

/// A child that raises until its fuse is disarmed.
///
/// The fuse is shared, so the scenario script can "fix" the component
/// between passes the way a user action or a completed retry would.
pub struct Flaky {
    label: &'static str,
    fuse: Rc<Cell<bool>>,
}

impl Flaky {
    pub fn armed(label: &'static str) -> Self {
        Self {
            label,
            fuse: Rc::new(Cell::new(true)),
        }
    }

    /// Shared flag controlling whether the next render raises.
    pub fn fuse(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fuse)
    }
}

impl Component for Flaky {
    fn name(&self) -> Option<&str> {
        Some("Flaky")
    }

    fn render(&mut self, _cx: &mut RenderCx) -> Result<Element, CapturedError> {
        if self.fuse.get() {
            Err(CapturedError::msg(format!("{} is unavailable", self.label)))
        } else {
            Ok(Node::new("panel")
                .attr("title", self.label)
                .child(Element::text("loaded"))
                .into())
        }
    }
}

/// Reusable alert presentation with a "Try again" affordance.
///
/// Stashes the reset handle it is offered so the scenario script can press
/// the button between passes, the way a click handler would.
#[derive(Default)]
pub struct ErrorFallback {
    handle: Rc<RefCell<Option<ResetHandle>>>,
}

impl ErrorFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared slot holding the most recently offered reset handle.
    pub fn handle(&self) -> Rc<RefCell<Option<ResetHandle>>> {
        Rc::clone(&self.handle)
    }
}

impl FallbackComponent for ErrorFallback {
    fn name(&self) -> Option<&str> {
        Some("ErrorFallback")
    }

    fn render(&mut self, ctx: FallbackContext<'_>) -> Result<Element, CapturedError> {
        *self.handle.borrow_mut() = ctx.reset_handle().cloned();
        let mut alert = Node::new("alert")
            .attr("tone", "error")
            .child(Element::text(format!("⚠ {}", ctx.error())));
        if ctx.can_reset() {
            alert = alert.child(
                Node::new("button")
                    .attr("action", "try-again")
                    .child(Element::text("Try again")),
            );
        }
        Ok(alert.into())
    }
}
