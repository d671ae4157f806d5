//! Client configuration from browser storage and location.
//!
//! Override the API host with
//! `localStorage.setItem("dashboard.api_base", "https://reports.example.org")`
//! and the console verbosity with `dashboard.log_level`.

use contracts::shared::client_config::{
    ClientConfig, LogLevel, API_BASE_STORAGE_KEY, LOG_LEVEL_STORAGE_KEY,
};
use leptos::prelude::*;
use web_sys::window;

fn read_storage(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Resolve the config from localStorage and `window.location`
pub fn load_client_config() -> ClientConfig {
    let location = window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_default();
    let hostname = location
        .as_ref()
        .and_then(|l| l.hostname().ok())
        .unwrap_or_default();

    ClientConfig::resolve(
        read_storage(API_BASE_STORAGE_KEY).as_deref(),
        read_storage(LOG_LEVEL_STORAGE_KEY).as_deref(),
        &protocol,
        &hostname,
    )
}

pub fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Trace => log::Level::Trace,
    }
}

/// Config provided by `App`, falling back to a fresh read
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_else(load_client_config)
}
