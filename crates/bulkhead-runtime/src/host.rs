#![forbid(unsafe_code)]

//! Render host: drives passes over a component tree and owns the commit.
//!
//! # Design
//!
//! Each call to [`RenderHost::render`] builds a fresh [`RenderCx`], renders
//! the root through it, and then either commits or aborts. On commit the
//! produced element replaces the previous frame and the after-commit queue
//! runs in order; boundary notifications ride that queue, which is what
//! makes `on_error` a post-commit observer. On abort (an error no boundary
//! captured) the pass leaves no trace: the previous frame stays committed
//! and the queued effects are dropped with the context.
//!
//! # Invariants
//!
//! 1. A pass commits fully or not at all: output and effects either both
//!    land or both vanish.
//! 2. After-commit effects run in queue order, after the frame is stored.
//! 3. `frames` counts committed passes only.

use bulkhead_core::{CapturedError, Component, Element, RenderCx};

/// Owns the committed frame and the pass counter for one component tree.
#[derive(Debug, Default)]
pub struct RenderHost {
    committed: Option<Element>,
    frames: u64,
}

impl RenderHost {
    /// A host with no committed frame yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one render pass over `root`.
    ///
    /// On success the returned element is the newly committed frame. On
    /// failure the error that escaped the tree is returned, the previous
    /// frame stays committed, and nothing queued during the pass runs.
    pub fn render<C>(&mut self, root: &mut C) -> Result<&Element, CapturedError>
    where
        C: Component + ?Sized,
    {
        let mut cx = RenderCx::new();
        match cx.render_child(root) {
            Ok(element) => {
                let element = self.committed.insert(element);
                self.frames += 1;
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "host.frame",
                    frame = self.frames,
                    effects = cx.pending_effects()
                );
                cx.run_effects();
                Ok(element)
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                {
                    let info = cx.take_caught_info();
                    tracing::warn!(
                        message = "host.abort",
                        error = %error,
                        raised_at = info.frames().first().map(String::as_str).unwrap_or("?"),
                        dropped_effects = cx.pending_effects()
                    );
                }
                Err(error)
            }
        }
    }

    /// The most recently committed frame, if any pass has committed.
    #[must_use]
    pub fn committed(&self) -> Option<&Element> {
        self.committed.as_ref()
    }

    /// Number of committed passes.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
