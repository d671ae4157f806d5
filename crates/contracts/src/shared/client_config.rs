//! Client-side settings read from browser storage.
//!
//! The frontend resolves raw strings (localStorage, `window.location`) and
//! hands them here; everything below is plain parsing.

use serde::{Deserialize, Serialize};

/// localStorage key overriding the API base URL
pub const API_BASE_STORAGE_KEY: &str = "dashboard.api_base";

/// localStorage key holding the console log level
pub const LOG_LEVEL_STORAGE_KEY: &str = "dashboard.log_level";

/// Port of the reporting backend when no override is stored
pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:3000`
    pub api_base: String,
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Builds the config from raw values.
    ///
    /// `protocol` is `window.location.protocol` (with trailing colon),
    /// `hostname` is `window.location.hostname`.
    pub fn resolve(
        api_base_override: Option<&str>,
        log_level: Option<&str>,
        protocol: &str,
        hostname: &str,
    ) -> Self {
        let api_base = api_base_override
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_api_base(protocol, hostname));

        Self {
            api_base,
            log_level: log_level.and_then(LogLevel::parse).unwrap_or_default(),
        }
    }

    /// Full URL for an API path starting with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

fn default_api_base(protocol: &str, hostname: &str) -> String {
    let protocol = if protocol.is_empty() { "http:" } else { protocol };
    let hostname = if hostname.is_empty() { "127.0.0.1" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_from_location() {
        let cfg = ClientConfig::resolve(None, None, "https:", "reports.example.org");
        assert_eq!(cfg.api_base, "https://reports.example.org:3000");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(
            cfg.url("/api/platform-list"),
            "https://reports.example.org:3000/api/platform-list"
        );
    }

    #[test]
    fn test_override_and_blank_location() {
        let cfg = ClientConfig::resolve(Some(" http://api.local/ "), Some("WARN"), "", "");
        assert_eq!(cfg.api_base, "http://api.local");
        assert_eq!(cfg.log_level, LogLevel::Warn);

        let cfg = ClientConfig::resolve(Some("  "), Some("loud"), "", "");
        assert_eq!(cfg.api_base, "http://127.0.0.1:3000");
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }
}
