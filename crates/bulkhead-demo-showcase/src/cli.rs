#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo showcase.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `BULKHEAD_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Bulkhead Demo Showcase - Error Boundaries in Practice

USAGE:
    bulkhead-demo-showcase [OPTIONS]

OPTIONS:
    --screen=N           Run screen N, 1-indexed (default: 1)
    --all                Run every screen in order
    --trace              Log boundary events to stderr while running
    --help, -h           Show this help message
    --version, -V        Show version

SCREENS:
    1  Static Fallback    Capture a failure and substitute a fixed element
    2  Fallback Render    Build the fallback from the captured error
    3  Fallback Component Reusable fallback with a try-again affordance
    4  With Helper        with_error_boundary and derived display names
    5  Reset Keys         Key identity changes drive automatic recovery
    6  Error Relay        A failure reported after commit finds a boundary

ENVIRONMENT VARIABLES:
    BULKHEAD_DEMO_SCREEN  Override --screen
    BULKHEAD_DEMO_ALL     Override --all (1/true to enable)
    BULKHEAD_DEMO_TRACE   Override --trace (1/true to enable)";

/// Parsed command-line options.
pub struct Opts {
    /// Screen to run (1-indexed).
    pub screen: u16,
    /// Run every screen in order.
    pub all: bool,
    /// Log boundary events to stderr while running.
    pub trace: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            screen: 1,
            all: false,
            trace: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("BULKHEAD_DEMO_SCREEN")
            && let Ok(n) = val.parse()
        {
            opts.screen = n;
        }
        if let Ok(val) = env::var("BULKHEAD_DEMO_ALL") {
            opts.all = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = env::var("BULKHEAD_DEMO_TRACE") {
            opts.trace = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Parse command-line args (override env vars)
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("bulkhead-demo-showcase {VERSION}");
                    process::exit(0);
                }
                "--all" => {
                    opts.all = true;
                }
                "--trace" => {
                    opts.trace = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--screen=") {
                        match val.parse() {
                            Ok(n) => opts.screen = n,
                            Err(_) => {
                                eprintln!("Invalid --screen value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.screen, 1);
        assert!(!opts.all);
        assert!(!opts.trace);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_contains_screens() {
        assert!(HELP_TEXT.contains("Static Fallback"));
        assert!(HELP_TEXT.contains("Fallback Component"));
        assert!(HELP_TEXT.contains("Reset Keys"));
        assert!(HELP_TEXT.contains("Error Relay"));
    }

    #[test]
    fn help_screen_count_matches_registry() {
        // Count numbered screen entries in the SCREENS section
        let screen_count = HELP_TEXT
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                // Lines like "    1  Static Fallback ..." start with a number
                trimmed
                    .split_whitespace()
                    .next()
                    .is_some_and(|tok| tok.parse::<u16>().is_ok())
                    && trimmed.len() > 5
            })
            .count();
        assert_eq!(
            screen_count,
            crate::screens::screen_registry().len(),
            "HELP_TEXT screen list count must match screen registry"
        );
    }

    #[test]
    fn help_text_contains_env_vars() {
        assert!(HELP_TEXT.contains("BULKHEAD_DEMO_SCREEN"));
        assert!(HELP_TEXT.contains("BULKHEAD_DEMO_ALL"));
        assert!(HELP_TEXT.contains("BULKHEAD_DEMO_TRACE"));
    }
}
