//! Application constants and configuration

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const CONVERT_PATH: &str = "/convert-measurements/";
pub const HISTORY_PATH: &str = "/measurement-history/";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Measurement Client";

// User-facing messages
pub const MSG_EMPTY_INPUT: &str = "Please enter a measurement string.";
pub const MSG_CONVERSION_FAILED: &str = "Conversion failed.";
pub const MSG_HISTORY_FAILED: &str = "Could not fetch history.";
pub const MSG_SERVER_UNAVAILABLE: &str = "Server unavailable.";
pub const MSG_INVALID_RESPONSE: &str = "Invalid response from server.";
pub const MSG_NO_HISTORY: &str = "No history found.";
pub const MSG_CONVERTING: &str = "Converting...";
pub const MSG_LOADING_HISTORY: &str = "Loading history...";
