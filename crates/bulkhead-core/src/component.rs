#![forbid(unsafe_code)]

//! Component trait and per-pass render context.
//!
//! # Design
//!
//! Rendering is an explicit, fallible call tree: a [`Component`] produces an
//! [`Element`] or raises a [`CapturedError`] through its `Result`. Parents
//! render children through [`RenderCx::render_child`], which maintains the
//! name stack used for raise-site reporting and records the deepest raise
//! site of the pass as a [`CaughtInfo`].
//!
//! The context also carries the after-commit queue: work such as `on_error`
//! notification that must run only once the pass's output has been committed
//! by the host. A host that abandons a failed pass drops the context, and
//! the queued work with it.
//!
//! # Invariants
//!
//! 1. The name stack after `render_child` returns is exactly what it was
//!    before the call, on both the `Ok` and `Err` paths.
//! 2. The raise-site snapshot is taken at the deepest frame that observed
//!    the error; outer frames never overwrite it. It is cleared only by
//!    [`RenderCx::take_caught_info`].
//! 3. After-commit effects run in queue order, at most once each.

use std::fmt;

use crate::caught::CaughtInfo;
use crate::element::Element;
use crate::error::CapturedError;

// Import tracing macros (no-op when tracing feature is disabled).
#[cfg(feature = "tracing")]
use crate::logging::trace;
#[cfg(not(feature = "tracing"))]
use crate::trace;

/// Name reported in raise-site stacks for components that declare none.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A renderable unit.
///
/// Errors are values: a failing render returns `Err`, and the nearest
/// enclosing error boundary decides what happens next. Panics are not part
/// of this channel; recoverable failures must travel through the `Result`.
pub trait Component {
    /// Diagnostic name used in raise-site stacks.
    ///
    /// `None` reports as [`UNKNOWN_NAME`].
    fn name(&self) -> Option<&str> {
        None
    }

    /// Produce this component's element for the current pass.
    fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError>;
}

/// Closures are components with no declared name.
impl<F> Component for F
where
    F: FnMut(&mut RenderCx) -> Result<Element, CapturedError>,
{
    fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError> {
        self(cx)
    }
}

/// Per-pass render context threaded through the component tree.
///
/// Created fresh by the host for every pass; never reused across passes.
#[derive(Default)]
pub struct RenderCx {
    stack: Vec<String>,
    caught: Option<CaughtInfo>,
    effects: Vec<Box<dyn FnOnce()>>,
}

impl RenderCx {
    /// Create an empty context for one render pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a child component, maintaining the name stack.
    ///
    /// On `Err`, records the raise site if this is the deepest frame to
    /// observe the error. The error itself is returned unchanged so `?`
    /// keeps propagating it toward the nearest boundary.
    pub fn render_child<C>(&mut self, child: &mut C) -> Result<Element, CapturedError>
    where
        C: Component + ?Sized,
    {
        let name = child.name().unwrap_or(UNKNOWN_NAME).to_string();
        self.stack.push(name);
        let result = child.render(self);
        if result.is_err() && self.caught.is_none() {
            let frames: Vec<String> = self.stack.iter().rev().cloned().collect();
            trace!(message = "render.raise", frame = %frames[0], depth = frames.len());
            self.caught = Some(CaughtInfo::from_frames(frames));
        }
        self.stack.pop();
        result
    }

    /// Current name-stack depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Take the raise-site description recorded for the propagating error.
    ///
    /// Called by the capturing boundary (or the host, for uncaught errors).
    /// Returns an empty description if nothing was recorded.
    pub fn take_caught_info(&mut self) -> CaughtInfo {
        self.caught.take().unwrap_or_default()
    }

    /// Queue work to run after the host commits this pass.
    pub fn after_commit(&mut self, effect: impl FnOnce() + 'static) {
        self.effects.push(Box::new(effect));
    }

    /// Number of effects waiting for commit.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Run and clear the queued after-commit effects, in queue order.
    pub fn run_effects(&mut self) {
        for effect in self.effects.drain(..) {
            effect();
        }
    }
}

impl fmt::Debug for RenderCx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCx")
            .field("stack", &self.stack)
            .field("caught", &self.caught)
            .field("pending_effects", &self.effects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Probe {
        name: &'static str,
        fail: bool,
    }

    impl Component for Probe {
        fn name(&self) -> Option<&str> {
            Some(self.name)
        }

        fn render(&mut self, _cx: &mut RenderCx) -> Result<Element, CapturedError> {
            if self.fail {
                Err(CapturedError::msg("boom"))
            } else {
                Ok(Element::text(self.name))
            }
        }
    }

    struct Wrapper {
        name: &'static str,
        inner: Probe,
    }

    impl Component for Wrapper {
        fn name(&self) -> Option<&str> {
            Some(self.name)
        }

        fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError> {
            cx.render_child(&mut self.inner)
        }
    }

    #[test]
    fn render_child_restores_stack_on_ok_and_err() {
        let mut cx = RenderCx::new();
        let mut ok = Probe {
            name: "Ok",
            fail: false,
        };
        let mut bad = Probe {
            name: "Bad",
            fail: true,
        };
        assert!(cx.render_child(&mut ok).is_ok());
        assert_eq!(cx.depth(), 0);
        assert!(cx.render_child(&mut bad).is_err());
        assert_eq!(cx.depth(), 0);
    }

    #[test]
    fn caught_info_is_deepest_first() {
        let mut cx = RenderCx::new();
        let mut root = Wrapper {
            name: "Outer",
            inner: Probe {
                name: "Leaf",
                fail: true,
            },
        };
        assert!(cx.render_child(&mut root).is_err());
        let info = cx.take_caught_info();
        assert_eq!(info.frames(), ["Leaf", "Outer"]);
    }

    #[test]
    fn closures_report_unknown() {
        let mut cx = RenderCx::new();
        let mut anon =
            |_cx: &mut RenderCx| -> Result<Element, CapturedError> { Err("boom".into()) };
        assert!(cx.render_child(&mut anon).is_err());
        assert_eq!(cx.take_caught_info().frames(), [UNKNOWN_NAME]);
    }

    #[test]
    fn snapshot_persists_until_taken() {
        let mut cx = RenderCx::new();
        let mut first = Probe {
            name: "First",
            fail: true,
        };
        let mut second = Probe {
            name: "Second",
            fail: true,
        };
        let _ = cx.render_child(&mut first);
        let _ = cx.render_child(&mut second);
        // First snapshot wins until consumed.
        assert_eq!(cx.take_caught_info().frames(), ["First"]);
        let _ = cx.render_child(&mut second);
        assert_eq!(cx.take_caught_info().frames(), ["Second"]);
    }

    #[test]
    fn take_on_fresh_context_is_empty() {
        let mut cx = RenderCx::new();
        assert_eq!(cx.take_caught_info().depth(), 0);
    }

    #[test]
    fn effects_run_once_in_queue_order() {
        let log: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let mut cx = RenderCx::new();
        for i in 0..3 {
            let log = Rc::clone(&log);
            cx.after_commit(move || log.borrow_mut().push(i));
        }
        assert_eq!(cx.pending_effects(), 3);
        cx.run_effects();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(cx.pending_effects(), 0);
        cx.run_effects();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn nested_components_render_through() {
        let mut cx = RenderCx::new();
        let mut root = Wrapper {
            name: "Outer",
            inner: Probe {
                name: "Leaf",
                fail: false,
            },
        };
        let element = cx.render_child(&mut root).expect("healthy render");
        assert_eq!(element, Element::text("Leaf"));
    }
}
