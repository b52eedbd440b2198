//! Logger initialization.
//!
//! The crate logs through the `log` facade under the `twinscreen_gui`
//! target. Binaries call [`init_logging`] once, early in `main`, to install
//! `env_logger`.
//!
//! Without an explicit filter the logger is quiet about everything except
//! this crate and the application's own target, so SDL and image decoding
//! chatter stays at `warn`.

use std::sync::Once;

use log::LevelFilter;

/// Log target of this crate.
pub const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string (e.g. `"twinscreen_gui=trace"`). Wins over
    /// `RUST_LOG` and the default filter.
    pub env_filter: Option<String>,
    /// Level for [`CRATE_TARGET`] and `app_target` under the default filter.
    pub level: LevelFilter,
    /// Binary crate name to log at `level` next to the library.
    pub app_target: Option<&'static str>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: LevelFilter::Info,
            app_target: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Logging setup for an application, taking the filter from a
    /// [`GuiConfig`](crate::GuiConfig).
    pub fn for_app(app_target: &'static str, config: &crate::GuiConfig) -> Self {
        Self {
            env_filter: config.log_filter.clone(),
            app_target: Some(app_target),
            ..Self::default()
        }
    }

    /// Builder for this configuration. `rust_log` is the `RUST_LOG` value.
    fn builder(&self, rust_log: Option<&str>) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();

        match self.env_filter.as_deref().or(rust_log) {
            Some(filter) => {
                builder.parse_filters(filter);
            }
            None => {
                builder.filter_level(LevelFilter::Warn);
                builder.filter_module(CRATE_TARGET, self.level);
                if let Some(app) = self.app_target {
                    builder.filter_module(app, self.level);
                }
            }
        }

        builder.write_style(self.write_style).format_timestamp_millis();
        builder
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are no-ops.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then the crate
/// scoped default.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();

        // Another logger may already be installed (tests, embedding apps).
        if config.builder(rust_log.as_deref()).try_init().is_err() {
            return;
        }

        log::debug!(target: CRATE_TARGET, "logging initialized at {}", config.level);
    });
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};

    use super::*;

    fn passes(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.matches(&Record::builder().target(target).level(level).build())
    }

    #[test]
    fn test_default_filter_scoped_to_crate_and_app() {
        let config = LoggingConfig::for_app("counter_demo", &crate::GuiConfig::default());
        let logger = config.builder(None).build();

        assert!(passes(&logger, "twinscreen_gui::gui", Level::Info));
        assert!(!passes(&logger, "twinscreen_gui::gui", Level::Debug));
        assert!(passes(&logger, "counter_demo", Level::Info));
        assert!(!passes(&logger, "sdl2", Level::Info));
        assert!(passes(&logger, "sdl2", Level::Warn));
    }

    #[test]
    fn test_explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("twinscreen_gui=trace".into()),
            ..LoggingConfig::default()
        };
        let logger = config.builder(Some("off")).build();
        assert!(passes(&logger, "twinscreen_gui::text", Level::Trace));

        let logger = LoggingConfig::default().builder(Some("off")).build();
        assert!(!passes(&logger, "twinscreen_gui::text", Level::Error));
    }
}
