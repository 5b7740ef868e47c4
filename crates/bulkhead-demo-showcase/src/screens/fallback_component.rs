#![forbid(unsafe_code)]

//! Fallback component screen.
//!
//! A reusable [`ErrorFallback`] presents the failure with a "Try again"
//! button. The same component type serves every boundary in an app; here
//! the script presses the button it renders.

use bulkhead_boundary::{ErrorBoundary, FallbackConfiguration};
use bulkhead_runtime::RenderHost;

use crate::components::{ErrorFallback, Flaky};
use crate::transcript;

pub fn run() {
    let fallback = ErrorFallback::new();
    let press = fallback.handle();

    let flaky = Flaky::armed("recommendations");
    let fuse = flaky.fuse();
    let mut boundary = ErrorBoundary::with_config(
        flaky,
        FallbackConfiguration::new().fallback_component(fallback),
    );

    let mut host = RenderHost::new();
    let frame = host.render(&mut boundary).expect("fallback is configured");
    transcript::print_pass("pass 1: ErrorFallback with a try-again button", frame);

    transcript::print_note("recommendation service recovers; the user clicks Try again");
    fuse.set(false);
    if let Some(handle) = press.borrow().clone() {
        handle.reset();
    }

    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 2: children render again", frame);
}
