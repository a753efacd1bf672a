//! PWA surface: web app manifest, service worker, offline fallback page.
//!
//! These are served outside the authenticated API so the browser can fetch
//! them during install and while offline.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::AppState;

const SERVICE_WORKER_JS: &str = include_str!("../../assets/service-worker.js");
const OFFLINE_HTML: &str = include_str!("../../assets/offline.html");

/// Placeholder in the worker source replaced with the configured version tag.
const VERSION_PLACEHOLDER: &str = "__ASSET_VERSION__";

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: &'static str,
    sizes: &'static str,
    #[serde(rename = "type")]
    icon_type: &'static str,
    purpose: &'static str,
}

#[derive(Debug, Serialize)]
struct Manifest {
    name: String,
    short_name: &'static str,
    description: &'static str,
    start_url: String,
    display: &'static str,
    background_color: &'static str,
    theme_color: &'static str,
    orientation: &'static str,
    icons: Vec<ManifestIcon>,
    categories: Vec<&'static str>,
}

/// GET /manifest.json - Web app manifest for the installable shell.
pub async fn get_manifest(State(state): State<AppState>) -> Response {
    let manifest = Manifest {
        name: format!("{} - Housekeeping", state.config.app_name),
        short_name: "Housekeeping",
        description: "Housekeeping operations management",
        start_url: state.config.start_url.clone(),
        display: "standalone",
        background_color: "#ffffff",
        theme_color: "#2196f3",
        orientation: "portrait",
        icons: vec![
            ManifestIcon {
                src: "/assets/icons/icon-192x192.png",
                sizes: "192x192",
                icon_type: "image/png",
                purpose: "any maskable",
            },
            ManifestIcon {
                src: "/assets/icons/icon-512x512.png",
                sizes: "512x512",
                icon_type: "image/png",
                purpose: "any maskable",
            },
        ],
        categories: vec!["productivity", "business"],
    };

    let body = serde_json::to_string_pretty(&manifest).unwrap_or_default();
    (
        [
            (header::CONTENT_TYPE, "application/manifest+json"),
            (header::HeaderName::from_static("service-worker-allowed"), "/"),
        ],
        body,
    )
        .into_response()
}

/// GET /service-worker.js - The offline cache worker, with the configured
/// cache version tag baked in.
pub async fn get_service_worker(State(state): State<AppState>) -> Response {
    let body = SERVICE_WORKER_JS.replace(VERSION_PLACEHOLDER, &state.config.asset_version);
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::HeaderName::from_static("service-worker-allowed"), "/"),
        ],
        body,
    )
        .into_response()
}

/// GET /offline.html - Fallback page the worker serves when nothing is
/// cached and the network is down.
pub async fn get_offline_page() -> Response {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], OFFLINE_HTML).into_response()
}
