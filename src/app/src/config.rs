//! Fixed timings and device endpoints.
//!
//! The control panel has no runtime configuration: the device serves the page
//! and the HTTP contract from the same origin, so everything here is a
//! compile-time constant.

/// Interval between two scheduled status polls.
pub const POLL_INTERVAL_MS: u64 = 3000;

/// Delay between inserting a notification and showing it, so the CSS
/// transition has a hidden starting state to animate from.
pub const NOTIFICATION_SHOW_DELAY_MS: u64 = 10;

/// How long a notification stays visible.
pub const NOTIFICATION_DISPLAY_MS: u64 = 3000;

/// Duration of the hide transition before the element is removed.
pub const NOTIFICATION_HIDE_TRANSITION_MS: u64 = 300;

/// Device status endpoint (GET, JSON body)
pub const STATUS_ENDPOINT: &str = "/status";

/// Credential save endpoint (POST, form-url-encoded body)
pub const SAVE_ENDPOINT: &str = "/save";

/// Credential clear endpoint (POST, empty body)
pub const CLEAR_ENDPOINT: &str = "/clear";

/// Placeholder rendered for status fields the device did not report.
pub const PLACEHOLDER: &str = "--";
