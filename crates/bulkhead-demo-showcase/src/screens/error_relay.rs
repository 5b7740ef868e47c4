#![forbid(unsafe_code)]

//! Error relay screen.
//!
//! After-commit work has no boundary above it, so a failure raised there
//! goes through the relay instead: the effect reports, and the component
//! re-raises at the top of its next render, where the boundary captures
//! it like any child error.

use std::cell::Cell;
use std::rc::Rc;

use bulkhead_boundary::{ErrorBoundary, FallbackConfiguration};
use bulkhead_core::{CapturedError, Element, Node, RenderCx};
use bulkhead_runtime::{ErrorRelay, RenderHost};

use crate::transcript;

pub fn run() {
    let relay = ErrorRelay::new();
    let checker = relay.clone();
    let reporter = relay.clone();
    let fetched = Rc::new(Cell::new(false));
    let fetch_flag = Rc::clone(&fetched);

    let feed = move |cx: &mut RenderCx| -> Result<Element, CapturedError> {
        checker.check()?;
        if !fetch_flag.get() {
            let relay = reporter.clone();
            let flag = Rc::clone(&fetch_flag);
            cx.after_commit(move || {
                flag.set(true);
                transcript::print_note("after commit: fetch fails, reported into the relay");
                relay.report("feed fetch failed: HTTP 503");
            });
        }
        Ok(Node::new("feed").child(Element::text("3 stories")).into())
    };

    let mut boundary = ErrorBoundary::with_config(
        feed,
        FallbackConfiguration::new().fallback_render(|ctx| {
            Ok(Node::new("alert")
                .attr("tone", "error")
                .child(Element::text(ctx.error().to_string()))
                .into())
        }),
    );

    let mut host = RenderHost::new();
    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 1: feed renders, fetch queued", frame);

    let frame = host.render(&mut boundary).expect("fallback pass");
    transcript::print_pass("pass 2: relayed failure captured by the boundary", frame);

    transcript::print_note("the user retries the feed");
    boundary.reset();

    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 3: children render again", frame);
}
