use once_cell::sync::OnceCell;

use crate::config::{Config, EnvSource, ProcessEnv};
use crate::error::ConfigError;

/// Validates the site configuration once and hands the same [`Config`] to every caller after.
///
/// The process bootstrap owns one of these for the lifetime of the process and passes it (or the
/// `&Config` it returns) to whatever needs configuration. There is no global instance; tests
/// just build a fresh loader.
///
/// Only success is remembered. If validation fails nothing is cached, and the next call to
/// [`get()`][Self::get] reads the source again, so fixing the environment and retrying works.
pub struct ConfigLoader<S = ProcessEnv> {
    source: S,
    config: OnceCell<Config>,
}

impl ConfigLoader<ProcessEnv> {
    /// A loader reading the environment of the current process.
    pub fn from_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> ConfigLoader<S> {
    pub fn new(source: S) -> Self {
        ConfigLoader {
            source,
            config: OnceCell::new(),
        }
    }

    /// Get the validated configuration, reading and validating the source on first use.
    ///
    /// If several threads get here before anything is cached, one of them validates while the
    /// others block on the cell, and they all come away with the same instance.
    pub fn get(&self) -> Result<&Config, ConfigError> {
        self.config.get_or_try_init(|| {
            log::debug!("validating site configuration");

            Config::from_source(&self.source)
                .map(|config| {
                    log::info!("site configuration loaded");
                    config
                })
                .map_err(|e| {
                    log::warn!("{}", e);
                    e
                })
        })
    }

    /// Returns `true` once a configuration has been validated and cached.
    pub fn is_loaded(&self) -> bool {
        self.config.get().is_some()
    }
}
