use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Stand-in for network latency on consultation requests.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

pub const TOAST_LIFETIME_MS: u32 = 5_000;

pub const HERO_ROTATION_MS: u32 = 2_000;
pub const SERVICE_ROTATION_MS: u32 = 4_000;

// Stats count-up in the about section
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 60;
pub const COUNTER_STAGGER_MS: u32 = 200;
