//! Base-URL resolution for the remote employee service.

use std::env;

use crate::{AppError, Result};

/// Public endpoint queried when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable consulted when `--base-url` is absent.
pub const BASE_URL_ENV: &str = "TODO_PROGRESS_BASE_URL";

/// Resolved runtime configuration for one reporter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Service base URL with surrounding whitespace and trailing
    /// slashes removed.
    pub base_url: String,
}

impl ReporterConfig {
    /// Resolve the base URL: CLI flag, then environment, then default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the resolved URL is empty.
    pub fn resolve(flag: Option<&str>) -> Result<Self> {
        match flag {
            Some(url) => Self::from_base_url(url),
            None => match env::var(BASE_URL_ENV) {
                Ok(url) => Self::from_base_url(&url),
                Err(_) => Self::from_base_url(DEFAULT_BASE_URL),
            },
        }
    }

    /// Build a configuration from an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the URL is empty after trimming.
    pub fn from_base_url(raw: &str) -> Result<Self> {
        let base_url = raw.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(AppError::Config("base URL must not be empty".into()));
        }
        Ok(Self {
            base_url: base_url.to_owned(),
        })
    }
}
