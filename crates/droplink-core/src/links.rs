//! Endpoint joining and short-link resolution

use url::Url;

/// Upload endpoint path, joined onto the configured base URL.
pub const UPLOAD_PATH: &str = "/api/upload";

/// Join a base and a path with exactly one separating slash, tolerating a
/// trailing slash on the base and a leading slash on the path.
pub fn join_endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolve a short link for display.
///
/// Servers configured without a public base hand back relative links like
/// `/s/abc123`; those are anchored against the page origin. Links that are
/// already absolute pass through, and anything that fails to resolve is
/// returned unchanged.
pub fn absolutize(origin: &str, short_url: &str) -> String {
    match Url::parse(short_url) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => match Url::parse(origin).and_then(|base| base.join(short_url)) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => short_url.to_string(),
        },
    }
}
