#![forbid(unsafe_code)]

//! With-helper screen.
//!
//! [`with_error_boundary`] wraps an existing component and derives a
//! display name from it, so raise-site descriptions attribute failures to
//! the wrapped component rather than to an anonymous boundary.

use bulkhead_boundary::{FallbackConfiguration, with_error_boundary};
use bulkhead_core::{Component, Element};
use bulkhead_runtime::RenderHost;

use crate::components::Flaky;
use crate::transcript;

pub fn run() {
    let flaky = Flaky::armed("activity stream");
    let fuse = flaky.fuse();
    let mut wrapped = with_error_boundary(
        flaky,
        FallbackConfiguration::new()
            .fallback(Element::text("activity stream is down"))
            .on_error(|err, info| {
                transcript::print_note(&format!("on_error fired after commit: {err}"));
                for line in info.component_stack().lines() {
                    println!("    {line}");
                }
            }),
    );
    transcript::print_note(&format!(
        "wrapper reports as {}",
        wrapped.name().unwrap_or("?")
    ));

    let mut host = RenderHost::new();
    let frame = host.render(&mut wrapped).expect("fallback is configured");
    transcript::print_pass("pass 1: failure attributed through the wrapper", frame);

    transcript::print_note("stream recovers; reset through the wrapper");
    fuse.set(false);
    wrapped.boundary_mut().reset();

    let frame = host.render(&mut wrapped).expect("healthy pass");
    transcript::print_pass("pass 2: children render again", frame);
}
