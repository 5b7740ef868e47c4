#![forbid(unsafe_code)]

//! Fallback render screen.
//!
//! A fallback function sees the captured error and the reset handle, so
//! the substituted frame can explain what actually failed. The script
//! stashes the handle the way a key handler would, then presses it.

use std::cell::RefCell;
use std::rc::Rc;

use bulkhead_boundary::{ErrorBoundary, FallbackConfiguration, ResetHandle};
use bulkhead_core::{Element, Node};
use bulkhead_runtime::RenderHost;

use crate::components::Flaky;
use crate::transcript;

pub fn run() {
    let handle_slot: Rc<RefCell<Option<ResetHandle>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&handle_slot);

    let flaky = Flaky::armed("search index");
    let fuse = flaky.fuse();
    let mut boundary = ErrorBoundary::with_config(
        flaky,
        FallbackConfiguration::new().fallback_render(move |ctx| {
            *slot.borrow_mut() = ctx.reset_handle().cloned();
            Ok(Node::new("alert")
                .attr("tone", "error")
                .child(Element::text(format!("search failed: {}", ctx.error())))
                .child(Element::text("press r to retry"))
                .into())
        }),
    );

    let mut host = RenderHost::new();
    let frame = host.render(&mut boundary).expect("fallback is configured");
    transcript::print_pass("pass 1: fallback built from the error", frame);

    transcript::print_note("index rebuilt; the user presses r");
    fuse.set(false);
    if let Some(handle) = handle_slot.borrow().clone() {
        handle.reset();
    }

    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 2: children render again", frame);
}
