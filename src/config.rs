//! Endpoint configuration for the droplink page.
//!
//! The API base is compiled in rather than read from the environment.
//! An empty base means "same origin as the page".

/// Base URL of the upload API. Leave empty to target the origin the
/// page was served from.
pub const API_BASE: &str = "";

/// Resolve the effective API base for this page load.
pub fn api_base() -> String {
    if !API_BASE.is_empty() {
        return API_BASE.trim_end_matches('/').to_string();
    }
    page_origin()
}

/// Origin of the current document, e.g. `https://ping.example`.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
