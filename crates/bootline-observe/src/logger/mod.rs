mod config;
mod error;
mod install;
mod object;

pub use config::{
    ENV_LOG_LEVEL, KEY_LOG_COLOR, KEY_LOG_FORMAT, KEY_LOG_LEVEL, KEY_LOG_TZ, LoggerConfig,
};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Call once, after command-line properties have been applied so that
/// `-Dbootline.log.*` overrides are already part of `cfg`.
///
/// `LoggerTimeZone::Local` needs [`init_local_offset`] to run first, while the
/// process is still single-threaded.
///
/// # Examples
/// ```rust
/// use bootline_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger installs once");
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::text(cfg),
        LoggerFormat::Json => install::json(cfg),
        LoggerFormat::Journald => install::journald(cfg),
    }
}
