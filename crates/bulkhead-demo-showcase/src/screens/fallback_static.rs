#![forbid(unsafe_code)]

//! Static fallback screen.
//!
//! The simplest configuration: a fixed element substituted whenever the
//! wrapped child fails. The script runs a failing pass, lets `on_error`
//! narrate the capture, then repairs the child, resets, and recovers.

use bulkhead_boundary::{ErrorBoundary, FallbackConfiguration};
use bulkhead_core::{Element, Node};
use bulkhead_runtime::RenderHost;

use crate::components::Flaky;
use crate::transcript;

pub fn run() {
    let flaky = Flaky::armed("billing panel");
    let fuse = flaky.fuse();
    let mut boundary = ErrorBoundary::with_config(
        flaky,
        FallbackConfiguration::new()
            .fallback(
                Node::new("alert")
                    .attr("tone", "error")
                    .child(Element::text("something went wrong"))
                    .into(),
            )
            .on_error(|err, info| {
                transcript::print_note(&format!("on_error fired after commit: {err}"));
                for line in info.component_stack().lines() {
                    println!("    {line}");
                }
            }),
    );

    let mut host = RenderHost::new();
    let frame = host.render(&mut boundary).expect("fallback is configured");
    transcript::print_pass("pass 1: child raises, fallback committed", frame);

    transcript::print_note("billing service recovers; the user retries");
    fuse.set(false);
    boundary.reset();

    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 2: children render again", frame);
}
