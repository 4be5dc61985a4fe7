//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout carries only the generated reply.
//! `RUST_LOG` directives win over the `-v` count.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Map the `-v` count to a default level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn create_filter(verbose: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy()
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(create_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
