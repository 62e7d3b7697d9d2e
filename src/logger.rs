use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{Registry, filter::Targets, prelude::*, util::TryInitError};

/// Maps a `-v` count to the most verbose level that will be emitted.
///
/// # Example
/// ```
/// use interpreta::logger::level_for;
/// use tracing::Level;
///
/// assert_eq!(level_for(0), Level::WARN);
/// assert_eq!(level_for(2), Level::DEBUG);
/// assert_eq!(level_for(9), Level::TRACE);
/// ```
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a global subscriber writing this crate's events to stderr.
///
/// Standard output is left to the result line.
///
/// # Errors
/// Fails if a global subscriber has already been set.
pub fn install(verbosity: u8) -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .with_filter(Targets::new().with_target("interpreta", level_for(verbosity)));

    Registry::default().with(fmt_layer).try_init()
}
