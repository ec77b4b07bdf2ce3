//! Upload-path rehydration.
//!
//! The backend reports uploaded files as paths relative to its static root
//! (`static/uploads/x.png`). Entities store the relative form so records stay
//! portable across environments; rendering prepends the configured base URL.

use url::Url;

/// Reduces any URL to the path the backend stores: no scheme, no host, no
/// leading slash.
///
/// Absolute `http(s)` URLs (any host) collapse to their path. Everything else
/// gets a best-effort string strip of `base` and the leading slash. Never
/// panics on malformed input.
pub fn strip_base_url(base: &str, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = Url::parse(url) {
        if matches!(parsed.scheme(), "http" | "https") {
            return parsed.path().trim_start_matches('/').to_string();
        }
    }
    let base = base.trim_end_matches('/');
    let rest = url.strip_prefix(base).unwrap_or(url);
    rest.trim_start_matches('/').to_string()
}

/// Turns a stored relative path into a browser-loadable URL by prepending
/// `base` with exactly one joining slash. Absolute `http(s)` and `data:`
/// URLs pass through unchanged.
pub fn make_absolute(base: &str, url: &str) -> String {
    if url.is_empty()
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("data:")
    {
        return url.to_string();
    }
    let base = base.trim_end_matches('/');
    let relative = url.trim_start_matches('/');
    format!("{base}/{relative}")
}
