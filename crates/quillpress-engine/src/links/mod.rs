//! # Link Validation
//!
//! Every href that ends up in exported HTML or in the editor's link dialog
//! goes through [`validate_url`]. Only `http`, `https` and `mailto` URLs are
//! accepted; script-capable schemes are rejected before parsing.

pub mod dialog;

pub use dialog::{LinkEdit, LinkRequest, plan_link};

use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Schemes rejected outright, compared case-insensitively against the input prefix.
const BLOCKED_PREFIXES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

/// Schemes a link may use.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Why a URL was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Please enter a URL")]
    Missing,
    #[error("{0} URLs are not allowed")]
    BlockedProtocol(String),
    #[error("Only http, https and mailto links are allowed, not {0}")]
    DisallowedProtocol(String),
    #[error("That doesn't look like a valid URL")]
    InvalidFormat,
}

/// Validates a user- or document-supplied href.
///
/// Bare domains such as `example.com` are accepted by retrying with
/// `https://` in front. On success the canonical URL is returned.
pub fn validate_url(raw: &str) -> Result<Url, UrlError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(UrlError::Missing);
    }

    if let Some(prefix) = BLOCKED_PREFIXES
        .iter()
        .find(|prefix| starts_with_ignore_case(input, prefix))
    {
        return Err(UrlError::BlockedProtocol(prefix.to_string()));
    }

    match Url::parse(input) {
        Ok(url) => check_scheme(url),
        Err(_) if !input.contains("://") && !starts_with_ignore_case(input, "mailto:") => {
            Url::parse(&format!("https://{input}")).map_err(|_| UrlError::InvalidFormat)
        }
        Err(_) => Err(UrlError::InvalidFormat),
    }
}

fn check_scheme(url: Url) -> Result<Url, UrlError> {
    if ALLOWED_SCHEMES.contains(&url.scheme()) {
        Ok(url)
    } else {
        Err(UrlError::DisallowedProtocol(format!("{}:", url.scheme())))
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Flat validation record for callers that render inline messages.
///
/// `url` is empty when invalid, `error` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlValidation {
    pub valid: bool,
    pub url: String,
    pub error: String,
}

impl UrlValidation {
    pub fn check(raw: &str) -> Self {
        validate_url(raw).into()
    }
}

impl From<Result<Url, UrlError>> for UrlValidation {
    fn from(result: Result<Url, UrlError>) -> Self {
        match result {
            Ok(url) => Self {
                valid: true,
                url: url.into(),
                error: String::new(),
            },
            Err(e) => Self {
                valid: false,
                url: String::new(),
                error: e.to_string(),
            },
        }
    }
}
