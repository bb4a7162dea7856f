//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values come from
//! `option_env!` when the crate is compiled:
//!
//! - `PORTAL_API_BASE_URL`: API origin prefix, default `""` (same origin)
//! - `PORTAL_REFRESH_TIMEOUT_MS`: token refresh timeout, default 10000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REFRESH_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORTAL_REFRESH_TIMEOUT_MS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every `/api/...` path, without trailing slash.
    pub api_base_url: String,
    /// Upper bound on a refresh request; a route guard never waits longer.
    pub refresh_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), refresh_timeout_ms: DEFAULT_REFRESH_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Config from the build environment, falling back to defaults on bad input.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_API_BASE_URL"), option_env!("PORTAL_REFRESH_TIMEOUT_MS"))
            .unwrap_or_else(|e| {
                log::warn!("{e}; using default client config");
                Self::default()
            })
    }

    /// Parse raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] when the timeout is not a positive integer.
    pub fn from_values(api_base_url: Option<&str>, refresh_timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        let refresh_timeout_ms = match refresh_timeout_ms.map(str::trim).filter(|v| !v.is_empty()) {
            None => DEFAULT_REFRESH_TIMEOUT_MS,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_owned()))?,
        };
        Ok(Self { api_base_url, refresh_timeout_ms })
    }

    /// Absolute (or origin-relative) URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
