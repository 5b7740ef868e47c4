#![forbid(unsafe_code)]

//! Screen registry for the demo showcase.
//!
//! Each screen is a self-contained scenario: it builds a component tree,
//! drives a few passes through a render host, and prints the committed
//! frames as transcripts.

mod error_relay;
mod fallback_component;
mod fallback_render;
mod fallback_static;
mod reset_keys;
mod with_helper;

/// One runnable demo screen.
pub struct ScreenEntry {
    /// 1-indexed screen number, matching the help text.
    pub number: u16,
    /// Short display name.
    pub name: &'static str,
    /// One-line summary printed above the transcript.
    pub summary: &'static str,
    /// Entry point.
    pub run: fn(),
}

/// Every demo screen, in menu order.
pub fn screen_registry() -> &'static [ScreenEntry] {
    const SCREENS: &[ScreenEntry] = &[
        ScreenEntry {
            number: 1,
            name: "Static Fallback",
            summary: "Capture a failure and substitute a fixed element in the same pass.",
            run: fallback_static::run,
        },
        ScreenEntry {
            number: 2,
            name: "Fallback Render",
            summary: "Build the fallback presentation from the captured error.",
            run: fallback_render::run,
        },
        ScreenEntry {
            number: 3,
            name: "Fallback Component",
            summary: "A reusable fallback component offering a try-again affordance.",
            run: fallback_component::run,
        },
        ScreenEntry {
            number: 4,
            name: "With Helper",
            summary: "with_error_boundary wraps a component and derives its display name.",
            run: with_helper::run,
        },
        ScreenEntry {
            number: 5,
            name: "Reset Keys",
            summary: "A key identity change while failed resets the boundary automatically.",
            run: reset_keys::run,
        },
        ScreenEntry {
            number: 6,
            name: "Error Relay",
            summary: "A failure reported after commit reaches a boundary on the next pass.",
            run: error_relay::run,
        },
    ];
    SCREENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_numbered_in_order() {
        let registry = screen_registry();
        for (index, entry) in registry.iter().enumerate() {
            assert_eq!(entry.number as usize, index + 1);
        }
    }

    #[test]
    fn every_screen_has_a_summary() {
        assert!(
            screen_registry()
                .iter()
                .all(|entry| !entry.summary.is_empty() && !entry.name.is_empty())
        );
    }
}
