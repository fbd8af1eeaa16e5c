//! URL validation for page sources.

use url::Url;

use crate::error::{Error, Result};

/// Check if a string is an absolute `http`/`https` URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            (true, Some(url))
        }
        _ => (false, None),
    }
}

/// Parse a page URL, rejecting anything that cannot be fetched over HTTP.
pub fn parse_page_url(s: &str) -> Result<Url> {
    match is_absolute_url(s) {
        (true, Some(url)) => Ok(url),
        _ => Err(Error::InvalidUrl(s.trim().to_string())),
    }
}
