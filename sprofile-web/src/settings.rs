//! Build-time settings for the web bundle.

use sprofile_core::AppConfig;
use tracing::{error, info};

/// Resolve the config baked in at build time against the page origin.
/// Bad settings are logged and replaced by the defaults.
pub fn resolve(origin: &str) -> AppConfig {
    let config = AppConfig::from_settings(
        origin,
        option_env!("SPROFILE_API_BASE"),
        option_env!("SPROFILE_REQUEST_TIMEOUT_MS"),
        option_env!("SPROFILE_ENTRY"),
    )
    .unwrap_or_else(|e| {
        error!("Invalid build settings, using defaults: {e}");
        AppConfig::for_origin(origin)
    });

    info!(
        "API base {}, timeout {:?}, entry {:?}",
        config.api_base, config.request_timeout, config.entry
    );
    config
}
