//! Target URL normalization.

use crate::error::{InferError, Result};
use url::{ParseError, Url};

/// Normalize a user-supplied target URL.
///
/// A URL without a scheme gets `http://` prepended. The result must parse as
/// an absolute `http`, `https` or `ftp` URL with a host, or a `file` URL.
/// The returned string is the (possibly prefixed) input, not a
/// re-serialization, so normalizing an already normalized URL returns it
/// unchanged.
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let normalized = match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) => format!("http://{trimmed}"),
        // `localhost:8080` parses with `localhost` as the scheme
        Ok(parsed) if parsed.cannot_be_a_base() => format!("http://{trimmed}"),
        _ => trimmed.to_string(),
    };

    let parsed = Url::parse(&normalized).map_err(|e| InferError::InvalidUrl {
        url: normalized.clone(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https" | "ftp" | "file") {
        return Err(InferError::InvalidUrl {
            url: normalized,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if parsed.scheme() != "file" && parsed.host_str().map_or(true, str::is_empty) {
        return Err(InferError::InvalidUrl {
            url: normalized,
            reason: "missing host".to_string(),
        });
    }

    Ok(normalized)
}
