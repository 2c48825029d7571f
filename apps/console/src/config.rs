use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Delay between a successful analysis trigger and the follow-up dashboard
/// refresh. The backend job reports no completion, so this is only an estimate.
pub const DEFAULT_ANALYSIS_REFRESH_DELAY: Duration = Duration::from_millis(5_000);
/// How long the refresh indicator stays up, independent of the fetch itself.
pub const DEFAULT_REFRESH_INDICATOR: Duration = Duration::from_millis(1_000);
pub const DEFAULT_ANALYSIS_STARTED_NOTICE: Duration = Duration::from_millis(3_000);
pub const DEFAULT_MEETING_NOTICE: Duration = Duration::from_millis(2_000);

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timings {
    pub analysis_refresh_delay: Duration,
    pub refresh_indicator: Duration,
    pub analysis_started_notice: Duration,
    pub meeting_notice: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            analysis_refresh_delay: DEFAULT_ANALYSIS_REFRESH_DELAY,
            refresh_indicator: DEFAULT_REFRESH_INDICATOR,
            analysis_started_notice: DEFAULT_ANALYSIS_STARTED_NOTICE,
            meeting_notice: DEFAULT_MEETING_NOTICE,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            timings: Timings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("JARVIS_API_BASE_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                config.api_base_url = trimmed.to_string();
            }
        }

        if let Some(secs) = parse_u64(lookup("JARVIS_REQUEST_TIMEOUT_SECS")) {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(ms) = parse_u64(lookup("JARVIS_ANALYSIS_REFRESH_DELAY_MS")) {
            config.timings.analysis_refresh_delay = Duration::from_millis(ms);
        }

        if let Some(ms) = parse_u64(lookup("JARVIS_REFRESH_INDICATOR_MS")) {
            config.timings.refresh_indicator = Duration::from_millis(ms);
        }

        if let Some(ms) = parse_u64(lookup("JARVIS_ANALYSIS_NOTICE_MS")) {
            config.timings.analysis_started_notice = Duration::from_millis(ms);
        }

        if let Some(ms) = parse_u64(lookup("JARVIS_MEETING_NOTICE_MS")) {
            config.timings.meeting_notice = Duration::from_millis(ms);
        }

        config
    }
}

fn parse_u64(value: Option<String>) -> Option<u64> {
    value.and_then(|raw| raw.trim().parse::<u64>().ok())
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "JARVIS_API_BASE_URL" => option_env!("JARVIS_API_BASE_URL"),
        "JARVIS_REQUEST_TIMEOUT_SECS" => option_env!("JARVIS_REQUEST_TIMEOUT_SECS"),
        "JARVIS_ANALYSIS_REFRESH_DELAY_MS" => option_env!("JARVIS_ANALYSIS_REFRESH_DELAY_MS"),
        "JARVIS_REFRESH_INDICATOR_MS" => option_env!("JARVIS_REFRESH_INDICATOR_MS"),
        "JARVIS_ANALYSIS_NOTICE_MS" => option_env!("JARVIS_ANALYSIS_NOTICE_MS"),
        "JARVIS_MEETING_NOTICE_MS" => option_env!("JARVIS_MEETING_NOTICE_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.timings.analysis_refresh_delay, Duration::from_millis(5_000));
        assert_eq!(config.timings.refresh_indicator, Duration::from_millis(1_000));
        assert_eq!(config.timings.analysis_started_notice, Duration::from_millis(3_000));
        assert_eq!(config.timings.meeting_notice, Duration::from_millis(2_000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JARVIS_API_BASE_URL", " https://jarvis.example.com/ "),
            ("JARVIS_REQUEST_TIMEOUT_SECS", "0"),
            ("JARVIS_ANALYSIS_REFRESH_DELAY_MS", "12000"),
            ("JARVIS_REFRESH_INDICATOR_MS", "250"),
        ]));
        assert_eq!(config.api_base_url, "https://jarvis.example.com/");
        assert_eq!(config.request_timeout, Duration::from_secs(1));
        assert_eq!(config.timings.analysis_refresh_delay, Duration::from_millis(12_000));
        assert_eq!(config.timings.refresh_indicator, Duration::from_millis(250));
    }

    #[test]
    fn unparseable_numbers_keep_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("JARVIS_ANALYSIS_REFRESH_DELAY_MS", "soon"),
            ("JARVIS_API_BASE_URL", "   "),
        ]));
        assert_eq!(config.timings, Timings::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
