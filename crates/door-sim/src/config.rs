use clap::ValueEnum;
use thiserror::Error;
use tracing::Level;

/// How iteration results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two lines per iteration: open belief, then closed belief.
    #[default]
    Text,
    /// One JSON object per iteration.
    Jsonl,
}

/// Root run configuration assembled from command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    pub format: OutputFormat,
    pub logging: LoggingConfig,
}

impl RunConfig {
    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.logging.normalize();
        self.logging.validate()
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub enable_structured: bool,
    pub tracing_level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Structured logging is enabled whenever a level or JSON output is requested.
    pub fn from_flags(level: Option<String>, json: bool) -> Self {
        let enable_structured = level.is_some() || json;
        Self {
            enable_structured,
            tracing_level: level.unwrap_or_else(default_tracing_level),
            json,
        }
    }

    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.level().is_none() {
            return Err(ConfigError::InvalidField {
                field: "log_level".to_string(),
                message: format!("unknown tracing level '{}'", self.tracing_level),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
