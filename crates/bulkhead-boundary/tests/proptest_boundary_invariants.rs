//! Property-based invariant tests for the error boundary state machine.
//!
//! These tests verify behavioral invariants that must hold for any
//! sequence of renders, resets, and key updates:
//!
//! 1. The boundary agrees with a reference state machine: displayed
//!    output, failed state, notification counts, and child render counts
//!    all match after every step.
//! 2. `on_error` fires exactly as many times as errors were captured.
//! 3. `on_reset` fires exactly as many times as resets were requested.
//! 4. Children render only on healthy passes.
//! 5. Fallback precedence is static, then render function, then component,
//!    for every subset of configured options.
//! 6. With no fallback configured, a failed pass raises the configuration
//!    error through the normal error channel.
//! 7. The raise-site description lists every enclosing frame, deepest
//!    first, for any nesting depth.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bulkhead_boundary::{
    ErrorBoundary, FallbackComponent, FallbackConfiguration, FallbackContext, ResetKey,
};
use bulkhead_core::{CapturedError, Component, ConfigurationError, Element, RenderCx};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Render { child_fails: bool },
    Reset,
    SetKeys(Vec<i64>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<bool>().prop_map(|child_fails| Op::Render { child_fails }),
        1 => Just(Op::Reset),
        2 => prop::collection::vec(0i64..4, 0..3).prop_map(Op::SetKeys),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1.–4. The boundary agrees with a reference state machine
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundary_matches_reference_model(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let armed = Rc::new(Cell::new(false));
        let child_renders = Rc::new(Cell::new(0u32));
        let errors = Rc::new(Cell::new(0u32));
        let resets = Rc::new(Cell::new(0u32));

        let child_armed = Rc::clone(&armed);
        let child_counter = Rc::clone(&child_renders);
        let child = move |_cx: &mut RenderCx| {
            child_counter.set(child_counter.get() + 1);
            if child_armed.get() {
                Err(CapturedError::msg("boom"))
            } else {
                Ok(Element::text("healthy"))
            }
        };
        let error_counter = Rc::clone(&errors);
        let reset_counter = Rc::clone(&resets);
        let mut boundary = ErrorBoundary::with_config(
            child,
            FallbackConfiguration::new()
                .fallback(Element::text("fallback"))
                .on_error(move |_err, _info| error_counter.set(error_counter.get() + 1))
                .on_reset(move || reset_counter.set(reset_counter.get() + 1)),
        );

        // Reference model, evolved alongside the boundary.
        let mut failed = false;
        let mut captures = 0u32;
        let mut model_resets = 0u32;
        let mut model_child_renders = 0u32;
        let mut keys: Vec<i64> = Vec::new();
        let mut prev: Option<Vec<i64>> = None;

        for op in ops {
            match op {
                Op::Render { child_fails } => {
                    armed.set(child_fails);
                    if failed {
                        if let Some(snapshot) = &prev {
                            if *snapshot != keys {
                                model_resets += 1;
                                failed = false;
                            }
                        }
                    }
                    prev = Some(keys.clone());
                    let expected = if failed {
                        Element::text("fallback")
                    } else {
                        model_child_renders += 1;
                        if child_fails {
                            captures += 1;
                            failed = true;
                            Element::text("fallback")
                        } else {
                            Element::text("healthy")
                        }
                    };
                    let mut cx = RenderCx::new();
                    let out = cx
                        .render_child(&mut boundary)
                        .expect("static fallback is configured");
                    cx.run_effects();
                    prop_assert_eq!(out, expected);
                }
                Op::Reset => {
                    model_resets += 1;
                    failed = false;
                    boundary.reset();
                }
                Op::SetKeys(next) => {
                    keys = next.clone();
                    boundary.set_reset_keys(next.into_iter().map(ResetKey::from));
                }
            }
            prop_assert_eq!(boundary.is_failed(), failed);
            prop_assert_eq!(errors.get(), captures);
            prop_assert_eq!(resets.get(), model_resets);
            prop_assert_eq!(child_renders.get(), model_child_renders);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5.–6. Fallback precedence for every configuration subset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn precedence_follows_configuration(
        has_static in any::<bool>(),
        has_render in any::<bool>(),
        has_component in any::<bool>(),
    ) {
        struct Presenter;
        impl FallbackComponent for Presenter {
            fn render(&mut self, _ctx: FallbackContext<'_>) -> Result<Element, CapturedError> {
                Ok(Element::text("component"))
            }
        }

        let mut config = FallbackConfiguration::new();
        if has_static {
            config = config.fallback(Element::text("static"));
        }
        if has_render {
            config = config.fallback_render(|_ctx| Ok(Element::text("render")));
        }
        if has_component {
            config = config.fallback_component(Presenter);
        }

        let mut boundary = ErrorBoundary::with_config(
            |_cx: &mut RenderCx| Err::<Element, _>(CapturedError::msg("boom")),
            config,
        );
        let mut cx = RenderCx::new();
        let result = cx.render_child(&mut boundary);

        match (has_static, has_render, has_component) {
            (true, _, _) => prop_assert_eq!(result.unwrap(), Element::text("static")),
            (false, true, _) => prop_assert_eq!(result.unwrap(), Element::text("render")),
            (false, false, true) => {
                prop_assert_eq!(result.unwrap(), Element::text("component"));
            }
            (false, false, false) => {
                let err = result.expect_err("no fallback configured");
                prop_assert!(err.downcast_ref::<ConfigurationError>().is_some());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. The raise site lists every enclosing frame, deepest first
// ═════════════════════════════════════════════════════════════════════════

struct Shell {
    name: String,
    inner: Box<dyn Component>,
}

impl Component for Shell {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn render(&mut self, cx: &mut RenderCx) -> Result<Element, CapturedError> {
        cx.render_child(&mut *self.inner)
    }
}

proptest! {
    #[test]
    fn raise_site_lists_every_enclosing_frame(depth in 0usize..5) {
        let frames: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let boundary = ErrorBoundary::with_config(
            |_cx: &mut RenderCx| Err::<Element, _>(CapturedError::msg("boom")),
            FallbackConfiguration::new()
                .fallback(Element::Empty)
                .on_error(move |_err, info| *sink.borrow_mut() = info.frames().to_vec()),
        );

        let mut component: Box<dyn Component> = Box::new(boundary);
        for level in 0..depth {
            component = Box::new(Shell {
                name: format!("Shell{level}"),
                inner: component,
            });
        }

        let mut cx = RenderCx::new();
        let _ = cx.render_child(&mut *component);
        cx.run_effects();

        let mut expected = vec!["Unknown".to_string(), "ErrorBoundary".to_string()];
        for level in 0..depth {
            expected.push(format!("Shell{level}"));
        }
        prop_assert_eq!(frames.borrow().clone(), expected);
    }
}
