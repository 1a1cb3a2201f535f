use std::time::Duration;

/// Key the cookie-consent flag is stored under.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

/// Directory name used for native preference storage.
pub const PREFERENCES_DIR: &str = "revitcad-site";

/// Timings and storage settings shared by the whole component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Interval between simulated download progress ticks.
    pub download_tick: Duration,
    /// Percentage added on every download tick.
    pub download_step: u8,
    /// Delay before the consent banner appears for visitors without a stored choice.
    pub consent_delay: Duration,
    /// Artificial latency of the contact form "submission".
    pub contact_submit_delay: Duration,
    /// How long each testimonial stays featured.
    pub carousel_interval: Duration,
    pub consent_key: &'static str,
    pub preferences_dir: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            download_tick: Duration::from_millis(300),
            download_step: 5,
            consent_delay: Duration::from_millis(1500),
            contact_submit_delay: Duration::from_millis(1500),
            carousel_interval: Duration::from_millis(5000),
            consent_key: CONSENT_STORAGE_KEY,
            preferences_dir: PREFERENCES_DIR,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> tracing::Level {
    tracing::Level::DEBUG
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> tracing::Level {
    tracing::Level::INFO
}

/// Renderer selected by cargo features; desktop wins when both are enabled.
pub fn renderer() -> Option<&'static str> {
    if cfg!(feature = "desktop") {
        Some("desktop")
    } else if cfg!(feature = "web") {
        Some("web")
    } else {
        None
    }
}
