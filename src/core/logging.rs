//! Logging subsystem.
//!
//! Records go to three sinks: the console (human-readable), `error.log`
//! (JSON, errors only) and `combined.log` (JSON, everything that passes the
//! level filter). Both files are opened in append mode and never rotated.
//!
//! File writes happen on dedicated worker threads fed through
//! `tracing_appender::non_blocking`, so records from concurrent requests are
//! written as whole lines. The returned [`LogGuard`] must be held for as long
//! as logging is needed; dropping it flushes pending records.
//!
//! The service tag is carried by spans: [`service_span`] for process-level
//! events and the per-request span opened by the router.

use tracing::{Level, Span, Subscriber, info_span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::{self, LevelFilter};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};

use super::config::LoggingConfig;
use super::error::{Error, Result};

/// File receiving error-level records only.
pub const ERROR_LOG: &str = "error.log";

/// File receiving every record.
pub const COMBINED_LOG: &str = "combined.log";

/// Keeps the background file writers alive.
#[must_use = "dropping the guard stops the file writers"]
pub struct LogGuard {
    _workers: Vec<WorkerGuard>,
}

/// Build the logging subscriber without installing it.
///
/// Creates the log directory if it does not exist yet.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, LogGuard)> {
    std::fs::create_dir_all(&config.directory)?;

    let (error_writer, error_guard) = tracing_appender::non_blocking(open_log(config, ERROR_LOG)?);
    let (combined_writer, combined_guard) =
        tracing_appender::non_blocking(open_log(config, COMBINED_LOG)?);

    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());

    let console = config.console.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stdout)
    });

    let error_file = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_writer(error_writer)
        // Spans must stay enabled here: they carry the service tag.
        .with_filter(filter::filter_fn(|meta| {
            meta.is_span() || *meta.level() == Level::ERROR
        }));

    let combined_file = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_writer(combined_writer);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(error_file)
        .with(combined_file);

    Ok((
        subscriber,
        LogGuard {
            _workers: vec![error_guard, combined_guard],
        },
    ))
}

/// Build the logging subscriber and install it as the process-wide default.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    let (subscriber, guard) = build_subscriber(config)?;
    subscriber
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;
    Ok(guard)
}

/// Root span tagging process-level events with the service name.
pub fn service_span(service: &str) -> Span {
    info_span!("service", service = %service)
}

fn open_log(config: &LoggingConfig, file_name: &str) -> Result<RollingFileAppender> {
    let (prefix, suffix) = file_name.rsplit_once('.').unwrap_or((file_name, "log"));
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix)
        .filename_suffix(suffix)
        .build(&config.directory)
        .map_err(|e| Error::logging(format!("cannot open {}: {}", file_name, e)))
}

/// Map a configured level name onto a filter, defaulting to `info`.
fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}
