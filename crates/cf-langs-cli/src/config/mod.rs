//! Configuration loading and resolution.

use std::time::Duration;

/// Environment variable overriding the submit page URL.
pub const URL_ENV: &str = "CF_LANGS_URL";

/// Environment variable holding a request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "CF_LANGS_TIMEOUT_MS";

/// Submit page used when nothing else is configured.
pub const DEFAULT_SUBMIT_URL: &str = "https://codeforces.com/problemset/submit";

/// Resolve the submit page URL: explicit argument, then env, then default.
pub fn resolve_submit_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(env_url) = std::env::var(URL_ENV) {
        if !env_url.trim().is_empty() {
            return env_url;
        }
    }

    DEFAULT_SUBMIT_URL.to_string()
}

/// Resolve the request timeout: explicit flag, then env, then none.
///
/// An env value that is not a number is ignored with a warning.
pub fn resolve_timeout(explicit_ms: Option<u64>) -> Option<Duration> {
    if let Some(ms) = explicit_ms {
        return Some(Duration::from_millis(ms));
    }

    let raw = std::env::var(TIMEOUT_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!(value = %raw, "ignoring non-numeric {TIMEOUT_ENV}");
            None
        }
    }
}
