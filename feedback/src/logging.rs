//! Development-time tracing.
//!
//! Diagnostics go to stderr so stdout stays reserved for reports. `RUST_LOG`
//! wins over `-v` flags when both are given.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is unset.
///
/// `0` keeps warnings only; each `-v` widens it for this crate.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,feedback=info",
        2 => "warn,feedback=debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=feedback=debug prompt-feedback analyze prompt.md
/// prompt-feedback -vv apply prompt.md --id passive-voice-1
/// ```
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity > 1)
                .compact(),
        )
        .init();
}
