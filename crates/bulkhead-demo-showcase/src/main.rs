#![forbid(unsafe_code)]

//! Demo showcase binary for Bulkhead error boundaries.
//!
//! Each screen is a scripted scenario: a component tree rendered through a
//! host for a handful of passes, with the committed frames printed as
//! transcripts. Failures, fallbacks, resets, and relayed errors all show
//! up as frames you can read. Run with `--help` for the screen list.

mod cli;
mod components;
mod screens;
mod transcript;

fn main() {
    let opts = cli::Opts::parse();
    if opts.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let registry = screens::screen_registry();
    if opts.all {
        for entry in registry {
            run_screen(entry);
        }
        return;
    }

    match registry.iter().find(|entry| entry.number == opts.screen) {
        Some(entry) => run_screen(entry),
        None => {
            eprintln!(
                "No screen {} (screens 1-{} are available).",
                opts.screen,
                registry.len()
            );
            std::process::exit(1);
        }
    }
}

fn run_screen(entry: &screens::ScreenEntry) {
    println!("━━━ {}. {} ━━━", entry.number, entry.name);
    println!("{}", entry.summary);
    println!();
    (entry.run)();
    println!();
}
