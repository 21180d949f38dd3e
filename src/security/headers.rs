//! Required request header validation.
//!
//! # Responsibilities
//! - Check that every banking request identifies its channel, user, language,
//!   country and session
//! - Report missing names in a fixed order
//!
//! # Design Decisions
//! - Pure function over the header map; never fails
//! - Header names are case-insensitive (HeaderMap lowercases them)
//! - A value that is empty or whitespace-only counts as missing; any other
//!   bytes pass, including non-ASCII

use axum::http::HeaderMap;

/// Headers every banking endpoint requires, in reporting order.
pub const REQUIRED_HEADERS: [&str; 5] = ["channelCode", "username", "lang", "countryCode", "sessionId"];

/// Result of checking a request's headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderValidation {
    missing: Vec<&'static str>,
}

impl HeaderValidation {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Missing header names in [`REQUIRED_HEADERS`] order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

/// Check `headers` against [`REQUIRED_HEADERS`].
pub fn validate_required_headers(headers: &HeaderMap) -> HeaderValidation {
    let missing = REQUIRED_HEADERS
        .into_iter()
        .filter(|name| {
            headers
                .get(*name)
                .map(|v| v.as_bytes().trim_ascii())
                .filter(|v| !v.is_empty())
                .is_none()
        })
        .collect();

    HeaderValidation { missing }
}
