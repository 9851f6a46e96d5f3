//! Color palette access.
//!
//! A fixed palette per flavor behind a global manager, so components ask
//! for semantic colors (`ThemeManager::status_error()`) instead of raw
//! terminal colors. Accessors fall back to sane colors when the manager
//! was never initialized (unit tests, early startup).

use crate::error::{AppError, AppResult};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use tuirealm::props::Color;

// Global theme manager instance
static GLOBAL_THEME_MANAGER: OnceCell<ThemeManager> = OnceCell::new();

// Fallback colors for when the manager is not initialized
mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const PRIMARY_ACCENT: Color = Color::Cyan;
    pub const TITLE_ACCENT: Color = Color::LightCyan;
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const SHORTCUT_KEY: Color = Color::LightCyan;
    pub const SHORTCUT_DESCRIPTION: Color = Color::Gray;
    pub const POPUP_TEXT: Color = Color::White;
}

/// Theme section of the configuration file
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeConfig {
    flavor: Option<String>,
}

impl ThemeConfig {
    pub fn flavor(&self) -> &str {
        self.flavor.as_deref().unwrap_or("dark")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFlavor {
    Dark,
    Light,
}

impl ThemeFlavor {
    pub fn parse(name: &str) -> AppResult<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(AppError::Config(format!(
                "Unknown theme flavor `{other}`; expected `dark` or `light`"
            ))),
        }
    }
}

struct Palette {
    text_primary: Color,
    text_muted: Color,
    primary_accent: Color,
    title_accent: Color,
    status_success: Color,
    status_error: Color,
    shortcut_key: Color,
    shortcut_description: Color,
    popup_text: Color,
}

impl Palette {
    fn for_flavor(flavor: ThemeFlavor) -> Self {
        match flavor {
            ThemeFlavor::Dark => Self {
                text_primary: Color::White,
                text_muted: Color::Gray,
                primary_accent: Color::Cyan,
                title_accent: Color::LightCyan,
                status_success: Color::Green,
                status_error: Color::Red,
                shortcut_key: Color::LightCyan,
                shortcut_description: Color::Gray,
                popup_text: Color::White,
            },
            ThemeFlavor::Light => Self {
                text_primary: Color::Black,
                text_muted: Color::DarkGray,
                primary_accent: Color::Blue,
                title_accent: Color::Blue,
                status_success: Color::Green,
                status_error: Color::Red,
                shortcut_key: Color::Blue,
                shortcut_description: Color::DarkGray,
                popup_text: Color::Black,
            },
        }
    }
}

pub struct ThemeManager {
    palette: Palette,
}

impl ThemeManager {
    /// Initialize the global theme manager - call this once at app startup
    pub fn init_global(config: &ThemeConfig) -> AppResult<()> {
        let flavor = ThemeFlavor::parse(config.flavor())?;
        let manager = Self {
            palette: Palette::for_flavor(flavor),
        };

        GLOBAL_THEME_MANAGER
            .set(manager)
            .map_err(|_| AppError::Config("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized with {flavor:?} flavor");
        Ok(())
    }

    fn get_color<F>(color_getter: F, fallback: Color) -> Color
    where
        F: FnOnce(&Palette) -> Color,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager) => color_getter(&manager.palette),
            None => fallback,
        }
    }
}

// Generates one static accessor per semantic color
macro_rules! theme_accessor {
    ($method:ident, $field:ident, $fallback:expr) => {
        impl ThemeManager {
            pub fn $method() -> Color {
                Self::get_color(|palette| palette.$field, $fallback)
            }
        }
    };
}

theme_accessor!(text_primary, text_primary, fallback_colors::TEXT_PRIMARY);
theme_accessor!(text_muted, text_muted, fallback_colors::TEXT_MUTED);
theme_accessor!(primary_accent, primary_accent, fallback_colors::PRIMARY_ACCENT);
theme_accessor!(title_accent, title_accent, fallback_colors::TITLE_ACCENT);
theme_accessor!(status_success, status_success, fallback_colors::STATUS_SUCCESS);
theme_accessor!(status_error, status_error, fallback_colors::STATUS_ERROR);
theme_accessor!(shortcut_key, shortcut_key, fallback_colors::SHORTCUT_KEY);
theme_accessor!(
    shortcut_description,
    shortcut_description,
    fallback_colors::SHORTCUT_DESCRIPTION
);
theme_accessor!(popup_text, popup_text, fallback_colors::POPUP_TEXT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flavor_parsing_is_case_insensitive() {
        assert_eq!(ThemeFlavor::parse("Dark").unwrap(), ThemeFlavor::Dark);
        assert_eq!(ThemeFlavor::parse("LIGHT").unwrap(), ThemeFlavor::Light);
    }

    #[test]
    fn unknown_flavor_is_rejected() {
        assert!(ThemeFlavor::parse("solarized").is_err());
    }

    #[test]
    fn default_config_is_dark() {
        let config = ThemeConfig::default();
        assert_eq!(config.flavor(), "dark");
    }

    #[test]
    fn flavors_differ_in_text_color() {
        let dark = Palette::for_flavor(ThemeFlavor::Dark);
        let light = Palette::for_flavor(ThemeFlavor::Light);
        assert_ne!(dark.text_primary, light.text_primary);
    }
}
