use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Property holding the filter expression.
pub const KEY_LOG_LEVEL: &str = "bootline.log.level";
/// Property holding the output format.
pub const KEY_LOG_FORMAT: &str = "bootline.log.format";
/// Property holding the timestamp timezone.
pub const KEY_LOG_TZ: &str = "bootline.log.tz";
/// Property enabling or disabling ANSI colors.
pub const KEY_LOG_COLOR: &str = "bootline.log.color";
/// Environment variable consulted for the level when no property is set.
pub const ENV_LOG_LEVEL: &str = "BOOTLINE_LOG";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g., "info", "bootline_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Color is used only when enabled and stderr, where logs go, is a
    /// terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }

    /// Overlay values found through `lookup` on top of `self`.
    ///
    /// `lookup` is asked for [`KEY_LOG_LEVEL`], [`KEY_LOG_FORMAT`],
    /// [`KEY_LOG_TZ`] and [`KEY_LOG_COLOR`]; keys it does not know keep their
    /// current value. Malformed values are errors, not silently ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(KEY_LOG_LEVEL) {
            self.level = level.parse()?;
        }
        if let Some(format) = lookup(KEY_LOG_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(tz) = lookup(KEY_LOG_TZ) {
            self.tz = tz.parse()?;
        }
        if let Some(color) = lookup(KEY_LOG_COLOR) {
            self.use_color = parse_switch(&color).ok_or(LoggerError::InvalidValue {
                key: KEY_LOG_COLOR,
                value: color,
            })?;
        }
        Ok(self)
    }
}

fn parse_switch(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
