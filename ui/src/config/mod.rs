use config::{Config, Environment, File};
use std::path::PathBuf;
use std::sync::OnceLock;

// Re-export all submodules
pub mod app;
pub mod demo;
pub mod keys;
pub mod limits;
pub mod validation;

// Re-export main types
pub use app::{AppConfig, LoggingConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration loading and access
static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

/// Config file chosen on the command line; must be set before first access
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Pin the configuration file location.
///
/// Call before the first [`get_config`]; later calls have no effect.
pub fn set_config_path(path: PathBuf) {
    if CONFIG_PATH.set(path).is_err() {
        log::warn!("Config path already set; ignoring override");
    }
}

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();
    let env_source = Environment::default().separator("__");

    let mut builder = Config::builder();
    if let Some(path) = CONFIG_PATH.get() {
        // An explicitly requested file must exist
        builder = builder.add_source(File::from(path.clone()));
    } else {
        // User-level file first, working directory overrides it
        if let Some(dir) = dirs::config_dir() {
            builder = builder.add_source(File::from(dir.join("vitrine/config.toml")).required(false));
        }
        builder = builder.add_source(File::with_name("config.toml").required(false));
    }

    // Environment entries still override file values when present
    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            panic!("Failed to load config: {e}");
        }
        ConfigLoadResult::DeserializeError(e) => {
            panic!("Failed to deserialize config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_file_values_override_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "tick_interval_millis = 200\n\n\
             [demo]\nprogress_step_percent = 5\n\n\
             [logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = Config::builder()
            .add_source(File::from(file.path()))
            .build()
            .unwrap();
        let app_config: AppConfig = config.try_deserialize().unwrap();

        assert_eq!(app_config.tick_interval().as_millis(), 200);
        assert_eq!(app_config.demo().progress_step_percent(), 5);
        assert_eq!(app_config.logging().level(), "debug");
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config = Config::builder()
            .add_source(File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap();
        let app_config: AppConfig = config.try_deserialize().unwrap();

        assert_eq!(app_config.tick_interval().as_millis(), 50);
        assert_eq!(app_config.keys().quit(), 'q');
        assert_eq!(app_config.demo().badge_maximum(), 99);
        assert!(app_config.validate().is_ok());
    }
}
