#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

// Retry policy shared by every collection fetch
pub const MAX_FETCH_ATTEMPTS: u32 = 3;
pub const INITIAL_RETRY_DELAY_MS: u64 = 1_000;
pub const MAX_RETRY_JITTER_MS: u64 = 500;

// Chat widget pacing
pub const TYPING_DELAY_MS: u32 = 500;
pub const POST_ACTION_DELAY_MS: u32 = 1_500;
pub const HOURS_REFRESH_MS: u32 = 60_000;

pub const LEAD_STORAGE_KEY: &str = "geemadhura_lead";

pub const SUPPORT_PHONE: &str = "+91 90000 00000";
pub const SUPPORT_EMAIL: &str = "info@geemadhura.com";
