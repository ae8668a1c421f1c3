//! Backend configuration.
//!
//! The scraper backend is a separate service; every page talks to the same
//! base origin. The origin is injected here once instead of being repeated at
//! each call site, and can be overridden at build time with
//! `CASEPULSE_BACKEND_URL` (useful when the backend is not on localhost).

/// Default origin of the court scraper backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Base origin used by [`crate::shared::services::ApiService`].
pub fn backend_base_url() -> String {
    option_env!("CASEPULSE_BACKEND_URL")
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!backend_base_url().ends_with('/'));
    }

    #[test]
    fn test_default_is_local_backend() {
        assert_eq!(DEFAULT_BACKEND_URL, "http://127.0.0.1:8000");
    }
}
