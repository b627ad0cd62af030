use anyhow::Result;
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Installs a stderr subscriber when logging is requested by flags or `RUST_LOG`.
///
/// Stdout carries the belief report, so logs never go there.
pub fn init_logging(logging: &LoggingConfig) -> Result<Option<LoggingGuard>> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    if !logging.enable_structured && env_filter.is_none() {
        return Ok(None);
    }

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(std::io::stderr());

    let level = logging.level().unwrap_or(Level::INFO);
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(level.as_str()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer);

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    if logging.json {
        let _ = tracing::subscriber::set_global_default(
            builder.json().with_current_span(false).finish(),
        );
    } else {
        let _ = tracing::subscriber::set_global_default(builder.finish());
    }

    Ok(Some(LoggingGuard { _guard: guard }))
}
