use std::env;

use bootline_core::{HomeLayout, Settings};
use bootline_model::{DEFAULT_MAIN_ENTRY, PROP_MAIN_ENTRY};
use bootline_observe::{ENV_LOG_LEVEL, KEY_LOG_LEVEL, LoggerConfig, LoggerResult};

/// Everything the binary needs to know before it launches.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Name of the entry point to run.
    pub main_entry: String,
    pub layout: HomeLayout,
    pub logger: LoggerConfig,
}

impl LauncherConfig {
    /// Read the configuration from `settings`, falling back to the process
    /// environment for the log level.
    pub fn load(settings: &dyn Settings, layout: HomeLayout) -> LoggerResult<Self> {
        Self::load_with(settings, layout, |name| env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with<E>(settings: &dyn Settings, layout: HomeLayout, env: E) -> LoggerResult<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let logger = LoggerConfig::default().with_overrides(|key| {
            settings.get(key).or_else(|| {
                if key == KEY_LOG_LEVEL {
                    env(ENV_LOG_LEVEL)
                } else {
                    None
                }
            })
        })?;

        let main_entry = settings
            .get(PROP_MAIN_ENTRY)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAIN_ENTRY.to_string());

        Ok(Self {
            main_entry,
            layout,
            logger,
        })
    }
}
