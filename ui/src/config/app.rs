use super::demo::DemoConfig;
use super::keys::KeyBindingsConfig;
use super::limits::*;
use super::validation::ConfigValidationError;
use crate::theme::ThemeConfig;
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    tick_interval_millis: Option<u64>,
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,

    #[serde(default)]
    demo: DemoConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    theme: ThemeConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let tick = self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let step = self.demo.progress_step_percent();
        if step == 0 || step > MAX_PROGRESS_STEP_PERCENT {
            errors.push(ConfigValidationError::ProgressStep {
                configured: step,
                limit: MAX_PROGRESS_STEP_PERCENT,
            });
        }

        if self.demo.badge_maximum() > MAX_BADGE_MAXIMUM {
            errors.push(ConfigValidationError::BadgeMaximum {
                configured: self.demo.badge_maximum(),
                limit: MAX_BADGE_MAXIMUM,
            });
        }

        if self.demo.password_min_length() > MAX_PASSWORD_MIN_LENGTH {
            errors.push(ConfigValidationError::PasswordMinLength {
                configured: self.demo.password_min_length(),
                limit: MAX_PASSWORD_MIN_LENGTH,
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS))
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    // Configuration section accessors
    pub fn demo(&self) -> &DemoConfig {
        &self.demo
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn tick_interval_out_of_range_is_rejected() {
        let config = parse("tick_interval_millis = 5000");

        let errors = config.validate().unwrap_err();
        assert!(matches!(
            errors[0],
            ConfigValidationError::TickInterval { configured: 5000, .. }
        ));
    }

    #[test]
    fn zero_progress_step_is_rejected() {
        let config = parse("[demo]\nprogress_step_percent = 0");

        let errors = config.validate().unwrap_err();
        assert!(matches!(
            errors[0],
            ConfigValidationError::ProgressStep { configured: 0, .. }
        ));
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = parse(
            "tick_interval_millis = 1\n[demo]\nprogress_step_percent = 90\nbadge_maximum = 5000",
        );

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
