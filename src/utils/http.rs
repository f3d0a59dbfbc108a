//! HTTP utilities for URL import

use std::time::Duration;
use url::Url;

use crate::error::{AliasError, Result};

/// Fetch content from a URL
pub fn fetch_url(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str).map_err(|e| AliasError::Fetch(e.to_string()))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(AliasError::Fetch(
            "Only HTTP/HTTPS URLs are supported".to_string(),
        ));
    }

    tracing::debug!(url = %url, "fetching import source");

    let response = ureq::get(url.as_str())
        .timeout(Duration::from_secs(30))
        .call()
        .map_err(|e| AliasError::Fetch(e.to_string()))?;

    if response.status() < 200 || response.status() >= 300 {
        return Err(AliasError::Fetch(format!(
            "HTTP request failed with status: {}",
            response.status()
        )));
    }

    Ok(response.into_string()?)
}

/// Check if a string is a valid URL
pub fn is_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        url.scheme() == "http" || url.scheme() == "https"
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/aliases.txt"));
        assert!(is_url("http://example.com/aliases.txt"));
        assert!(!is_url("/home/user/aliases.txt"));
        assert!(!is_url("aliases.txt"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = fetch_url("ftp://example.com/aliases.txt").unwrap_err();
        assert!(matches!(err, AliasError::Fetch(_)));
    }
}
