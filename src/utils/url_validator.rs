//! Absolute URL validation.

use url::Url;

/// Returned when a candidate string is not an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid URL")]
pub struct InvalidUrl;

/// Checks that `input` is an absolute URL with a non-empty scheme and host.
///
/// Only the syntax is checked; the target is never contacted.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("http://www.google.com").is_ok());
/// assert!(validate_url("asdasd").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), InvalidUrl> {
    let url = Url::parse(input).map_err(|_| InvalidUrl)?;

    if url.scheme().is_empty() {
        return Err(InvalidUrl);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(InvalidUrl),
    }
}
