#![forbid(unsafe_code)]

//! Reset keys screen.
//!
//! A boundary with reset keys recovers on its own when the identity of a
//! key changes while it is failed. The story is route navigation: a
//! profile page fails for one user, stays failed on re-render, then heals
//! when the route (and so the key) changes.

use bulkhead_boundary::{ErrorBoundary, FallbackConfiguration, ResetKey};
use bulkhead_core::Element;
use bulkhead_runtime::RenderHost;

use crate::components::Flaky;
use crate::transcript;

pub fn run() {
    let flaky = Flaky::armed("profile");
    let fuse = flaky.fuse();
    let mut boundary = ErrorBoundary::with_config(
        flaky,
        FallbackConfiguration::new()
            .fallback(Element::text("profile failed to load"))
            .on_reset(|| transcript::print_note("on_reset fired: key identity changed"))
            .reset_keys([ResetKey::from("user-1")]),
    );

    let mut host = RenderHost::new();
    let frame = host.render(&mut boundary).expect("fallback is configured");
    transcript::print_pass("pass 1: /users/1 fails", frame);

    let frame = host.render(&mut boundary).expect("fallback pass");
    transcript::print_pass("pass 2: same key, still failed", frame);

    transcript::print_note("navigate to /users/2");
    fuse.set(false);
    boundary.set_reset_keys([ResetKey::from("user-2")]);

    let frame = host.render(&mut boundary).expect("healthy pass");
    transcript::print_pass("pass 3: new key identity, children render again", frame);
}
