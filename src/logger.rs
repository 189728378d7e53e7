//! Logging setup for the deptree CLI.
//!
//! Diagnostics are written to stderr through `tracing`, leaving stdout for
//! the rendered tree. The level comes from command-line flags only.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How much diagnostic output to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`--quiet`)
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Debug events (`--verbose`)
    Verbose,
}

impl Verbosity {
    /// The most detailed level shown at this verbosity.
    pub fn level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before anything is logged.
pub fn init_logger(verbosity: Verbosity) {
    let level = verbosity.level();
    let filter = EnvFilter::new(format!("deptree={}", level.as_str().to_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.level(), Level::DEBUG);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }
}
