//! Helpers for building backend request URLs

/// Port the backend listens on (see `[server]` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, derived from the page location.
///
/// Returns e.g. "http://localhost:3000"; an empty string (same-origin
/// relative URLs) when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Joins a base URL, a path and URL-encoded query parameters
///
/// # Example
/// ```
/// use frontend::shared::api_utils::build_url;
/// let url = build_url("http://localhost:3000", "/api/p909/sales", &[("from", "a+b")]);
/// assert_eq!(url, "http://localhost:3000/api/p909/sales?from=a%2Bb");
/// ```
pub fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", base.trim_end_matches('/'), path);
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
