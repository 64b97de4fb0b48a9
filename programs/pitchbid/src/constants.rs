pub const SEED_EVENT_STATE: &[u8] = b"event_state";
pub const SEED_USER: &[u8] = b"user";
pub const SEED_PROJECT: &[u8] = b"project";

/// Registration auto-closes this many seconds after it is opened.
pub const REGISTRATION_WINDOW_SECS: i64 = 10 * 60;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Stored for projects created without a description.
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "No description provided";
