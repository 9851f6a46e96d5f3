use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid progress_step_percent: {configured} (min: 1, max: {limit})")]
    ProgressStep { configured: u32, limit: u32 },
    #[error("Invalid badge_maximum: {configured} (limit: {limit})")]
    BadgeMaximum { configured: u32, limit: u32 },
    #[error("Invalid password_min_length: {configured} (limit: {limit})")]
    PasswordMinLength { configured: usize, limit: usize },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Tick interval out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update tick_interval_millis in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::ProgressStep { configured, limit } => {
                format!(
                    "Progress step out of range!\n\n\
                    Your configured value: {configured} percent\n\
                    Valid range: 1 - {limit} percent\n\n\
                    Please update progress_step_percent in config.toml."
                )
            }
            ConfigValidationError::BadgeMaximum { configured, limit } => {
                format!(
                    "Badge maximum too high!\n\n\
                    Your configured value: {configured}\n\
                    Recommended maximum: {limit}\n\n\
                    Please update badge_maximum in config.toml."
                )
            }
            ConfigValidationError::PasswordMinLength { configured, limit } => {
                format!(
                    "Password minimum length too high!\n\n\
                    Your configured value: {configured}\n\
                    Recommended maximum: {limit}\n\n\
                    Please update password_min_length in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
