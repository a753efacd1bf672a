//! Configuration module for the housekeeping backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default cleaning checklist shown when a room has no saved checklist.
pub const DEFAULT_CHECKLIST_ITEMS: &[&str] = &[
    "Vacuum floor",
    "Dust surfaces",
    "Clean bathroom",
    "Change linens",
    "Empty trash",
    "Restock amenities",
    "Check minibar",
    "Inspect for damage",
];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared session token for API authentication (required in production)
    pub session_token: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Path to the permission grants file (user id -> permission list).
    /// When unset, every permission check passes (dev mode).
    pub grants_path: Option<PathBuf>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Display name used in the PWA manifest
    pub app_name: String,
    /// Start URL for the installed app
    pub start_url: String,
    /// Version tag for the service worker cache bundle
    pub asset_version: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let session_token = env::var("HK_SESSION_TOKEN").ok();

        let db_path = env::var("HK_DB_PATH")
            .unwrap_or_else(|_| "./data/housekeeping.sqlite".to_string())
            .into();

        let grants_path = env::var("HK_GRANTS_PATH").ok().map(PathBuf::from);

        let bind_addr = env::var("HK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid HK_BIND_ADDR format");

        let log_level = env::var("HK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let app_name =
            env::var("HK_APP_NAME").unwrap_or_else(|_| "Housekeeping".to_string());

        let start_url = env::var("HK_START_URL").unwrap_or_else(|_| "/".to_string());

        let asset_version =
            env::var("HK_ASSET_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        Self {
            session_token,
            db_path,
            grants_path,
            bind_addr,
            log_level,
            app_name,
            start_url,
            asset_version,
        }
    }
}
