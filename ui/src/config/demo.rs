use serde::Deserialize;

/// Tunables for the demo screens
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DemoConfig {
    /// Percent added to the progress demo per tick while running
    progress_step_percent: Option<u32>,
    /// Badge display cap; larger counts render as "{cap}+"
    badge_maximum: Option<u32>,
    /// Minimum password length enforced by the demo form
    password_min_length: Option<usize>,
}

impl DemoConfig {
    pub fn progress_step_percent(&self) -> u32 {
        self.progress_step_percent.unwrap_or(2)
    }

    pub fn badge_maximum(&self) -> u32 {
        self.badge_maximum.unwrap_or(99)
    }

    pub fn password_min_length(&self) -> usize {
        self.password_min_length.unwrap_or(8)
    }
}
