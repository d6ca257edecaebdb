use log::Level;
use web_sys::window;

/// Global application settings.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Scoring-service host.
    pub api_host: String,

    /// Scoring-service port.
    pub api_port: u16,

    /// Path prefix when the service sits behind a reverse proxy.
    pub api_path: String,

    /// Use HTTPS for API requests.
    pub api_use_https: bool,

    /// Log level handed to wasm-logger at startup.
    pub log_level: Level,

    /// True when the dashboard is served from localhost.
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Builds settings from the window location, then applies localStorage
    /// overrides. In development the API is the locally running service; in
    /// production the dashboard is served next to the API behind one host
    /// and talks to it same-origin under `/api`.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            if settings.debug_mode {
                settings.log_level = Level::Debug;
            } else {
                settings.api_host = hostname;
                settings.api_path = "/api".to_string();
                if let Ok(protocol) = window.location().protocol() {
                    settings.api_use_https = protocol == "https:";
                }
                settings.api_port = window
                    .location()
                    .port()
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(if settings.api_use_https { 443 } else { 80 });
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_host)) = storage.get_item("eaiwatch_api_host") {
                settings.api_host = api_host;
            }

            if let Ok(Some(api_port)) = storage.get_item("eaiwatch_api_port") {
                if let Ok(port) = api_port.parse::<u16>() {
                    settings.api_port = port;
                }
            }

            if let Ok(Some(api_path)) = storage.get_item("eaiwatch_api_path") {
                settings.api_path = api_path;
            }

            if let Ok(Some(use_https)) = storage.get_item("eaiwatch_api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }

            if let Ok(Some(log_level)) = storage.get_item("eaiwatch_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }

    /// The base API URL (protocol + host + port + path prefix).
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings.
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup).
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
