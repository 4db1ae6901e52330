//! App configuration
//!
//! The web bundle has no config file or environment at runtime, so settings
//! are baked in at build time (`SPROFILE_API_BASE`, `SPROFILE_REQUEST_TIMEOUT_MS`,
//! `SPROFILE_ENTRY`) and resolved against the page origin on startup.

use std::time::Duration;

use thiserror::Error;

/// How the page decides what to mount first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    /// Probe the session, then show either the login prompt or the profile.
    #[default]
    Gated,
    /// Mount the profile view straight away with no session probe.
    ///
    /// Deprecated: kept only for parity with the earlier page that skipped the
    /// probe. A signed-out visitor sees fetch errors instead of the login prompt.
    Ungated,
}

/// Longest delay `setTimeout` honours; larger values fire immediately.
pub const MAX_TIMEOUT_MS: u64 = i32::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid request timeout {0:?}: expected milliseconds")]
    InvalidTimeout(String),
    #[error("request timeout {0}ms exceeds the browser timer limit of 2147483647ms")]
    TimeoutTooLarge(u64),
    #[error("unknown entry mode {0:?}: expected \"gated\" or \"ungated\"")]
    InvalidEntryMode(String),
    #[error("API base {0:?} must be an absolute http(s) URL")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme and host the API paths are appended to.
    pub api_base: String,
    /// Per-request deadline. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub entry: EntryMode,
}

impl AppConfig {
    /// Defaults for a page served by the backend itself.
    pub fn for_origin(origin: &str) -> Self {
        Self {
            api_base: origin.trim_end_matches('/').to_string(),
            request_timeout: None,
            entry: EntryMode::Gated,
        }
    }

    /// Resolve build-time settings against the page origin.
    /// Unset or blank settings keep the defaults from [`AppConfig::for_origin`].
    pub fn from_settings(
        origin: &str,
        api_base: Option<&str>,
        request_timeout_ms: Option<&str>,
        entry: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::for_origin(origin);

        if let Some(base) = non_blank(api_base) {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::InvalidApiBase(base.to_string()));
            }
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(ms) = non_blank(request_timeout_ms) {
            let ms: u64 = ms
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(ms.to_string()))?;
            if ms > MAX_TIMEOUT_MS {
                return Err(ConfigError::TimeoutTooLarge(ms));
            }
            // 0 disables the deadline
            config.request_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }

        if let Some(mode) = non_blank(entry) {
            config.entry = match mode.to_ascii_lowercase().as_str() {
                "gated" => EntryMode::Gated,
                "ungated" => EntryMode::Ungated,
                _ => return Err(ConfigError::InvalidEntryMode(mode.to_string())),
            };
        }

        Ok(config)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
