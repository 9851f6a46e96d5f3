//! Hard limits configuration values are validated against.

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

pub const MAX_PROGRESS_STEP_PERCENT: u32 = 25;
pub const MAX_BADGE_MAXIMUM: u32 = 999;
pub const MAX_PASSWORD_MIN_LENGTH: usize = 32;
