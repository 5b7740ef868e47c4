#![forbid(unsafe_code)]

//! Structured description of where an error was raised.
//!
//! A [`CaughtInfo`] is the second argument delivered to a boundary's
//! `on_error` callback: the chain of component names from the raise site
//! outward, formatted the way frameworks print component stacks.

use std::fmt;

/// Raise-site description captured alongside an error.
///
/// Frames are ordered deepest-first: index 0 is the component whose render
/// raised, the last entry is the outermost frame of the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaughtInfo {
    frames: Vec<String>,
}

impl CaughtInfo {
    /// Build from deepest-first frames.
    #[must_use]
    pub fn from_frames(frames: Vec<String>) -> Self {
        Self { frames }
    }

    /// Component names, deepest-first.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The formatted component stack, one `    at <name>` line per frame.
    #[must_use]
    pub fn component_stack(&self) -> String {
        self.frames
            .iter()
            .map(|frame| format!("    at {frame}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CaughtInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.component_stack())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_is_deepest_first() {
        let info = CaughtInfo::from_frames(vec!["Bomb".into(), "ErrorBoundary".into()]);
        assert_eq!(info.depth(), 2);
        assert_eq!(info.frames()[0], "Bomb");
        assert_eq!(
            info.component_stack(),
            "    at Bomb\n    at ErrorBoundary"
        );
    }

    #[test]
    fn empty_info_formats_to_nothing() {
        let info = CaughtInfo::default();
        assert_eq!(info.depth(), 0);
        assert_eq!(info.to_string(), "");
    }
}
