//! Root loggers for programs that drive an [`IdentityBootstrapper`].
//!
//! The library itself only logs through the `Logger` it is given.
//!
//! [`IdentityBootstrapper`]: crate::IdentityBootstrapper
use crate::error::fs::FsError;
use slog::{Drain, Level, Logger};
use std::path::PathBuf;

/// Where bootstrap log records are written.
pub enum LoggingMode {
    /// Compact records on STDERR.
    Stderr,

    /// STDERR and an audit file.
    Tee(PathBuf),

    /// An audit file only, one fully formatted record per line.
    File(PathBuf),
}

/// Maps a verbosity count to a level. Negative counts silence warnings, then
/// errors, then everything (`None`).
pub fn level_for_verbosity(verbose_level: i64) -> Option<Level> {
    match verbose_level {
        -3 => Some(Level::Critical),
        -2 => Some(Level::Error),
        -1 => Some(Level::Warning),
        0 => Some(Level::Info),
        1 => Some(Level::Debug),
        x if x > 1 => Some(Level::Trace),
        _ => None,
    }
}

fn create_drain(mode: LoggingMode) -> Result<Logger, FsError> {
    let logger = match mode {
        LoggingMode::Stderr => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            let drain = slog_term::CompactFormat::new(decorator).build().fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        // Written synchronously: a record is on disk once the log call returns,
        // so the file stays complete if the process exits during enrollment.
        LoggingMode::File(out) => {
            let file = crate::fs::create_file(&out)?;
            let decorator = slog_term::PlainSyncDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Logger::root(drain, slog::o!())
        }
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr)?,
                create_drain(LoggingMode::File(out))?,
            )
            .fuse(),
            slog::o!(),
        ),
    };
    Ok(logger)
}

/// Create a root logger tagged with this library's version.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> Result<Logger, FsError> {
    let Some(level) = level_for_verbosity(verbose_level) else {
        return Ok(Logger::root(slog::Discard, slog::o!()));
    };

    let drain = slog::LevelFilter::new(create_drain(mode)?, level).fuse();
    Ok(Logger::root(
        drain,
        slog::o!("fabric_ca_core" => env!("CARGO_PKG_VERSION")),
    ))
}
