//! Input acquisition.
//!
//! Resolves one of the three input modes (pasted text, uploaded file, web
//! page) to the single string the summarizer consumes. Failures are typed
//! here; [`SourceReader::read_or_empty`] is the boundary that turns them
//! into "no text extracted".

use std::io::Read;
use std::path::Path;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::encoding::{decode_text, transcode_html};
use crate::error::{Error, Result};
use crate::html::paragraph_text;
use crate::options::FetchOptions;
use crate::url_utils::parse_page_url;

/// Where the text to summarize comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text supplied directly.
    Text(String),
    /// Raw bytes of an uploaded file.
    File(Vec<u8>),
    /// A web page whose paragraph text is summarized.
    Url(String),
}

impl Source {
    /// Map a numeric form choice to a source: 1 = text, 2 = file, 3 = URL.
    ///
    /// Returns `None` for any other choice or when the chosen field is
    /// missing.
    #[must_use]
    pub fn from_choice(
        choice: u8,
        text: Option<String>,
        file: Option<Vec<u8>>,
        url: Option<String>,
    ) -> Option<Self> {
        match choice {
            1 => text.map(Self::Text),
            2 => file.map(Self::File),
            3 => url.map(Self::Url),
            _ => None,
        }
    }

    /// Short name of the variant, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::File(_) => "file",
            Self::Url(_) => "url",
        }
    }
}

/// Reads sources within fixed time and size limits.
#[derive(Debug, Clone)]
pub struct SourceReader {
    client: Client,
    options: FetchOptions,
}

impl SourceReader {
    /// Build a reader with its own HTTP client.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .build()?;
        Ok(Self { client, options })
    }

    /// Limits this reader enforces.
    #[must_use]
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Resolve a source to text.
    pub fn read(&self, source: &Source) -> Result<String> {
        match source {
            Source::Text(text) => Ok(text.clone()),
            Source::File(bytes) => self.decode_file(bytes),
            Source::Url(url) => self.fetch_paragraphs(url),
        }
    }

    /// Resolve a source to text, logging any failure and returning an
    /// empty string in its place.
    #[must_use]
    pub fn read_or_empty(&self, source: &Source) -> String {
        match self.read(source) {
            Ok(text) => text,
            Err(err) => {
                warn!(source = source.kind(), error = %err, "no text extracted");
                String::new()
            }
        }
    }

    /// Read a local file as a [`Source::File`].
    pub fn load_file(&self, path: &Path) -> Result<Source> {
        let len = std::fs::metadata(path)?.len();
        if !usize::try_from(len).is_ok_and(|len| len <= self.options.max_bytes) {
            return Err(Error::TooLarge {
                limit: self.options.max_bytes,
            });
        }
        Ok(Source::File(std::fs::read(path)?))
    }

    /// Decode uploaded file bytes.
    pub fn decode_file(&self, bytes: &[u8]) -> Result<String> {
        if bytes.len() > self.options.max_bytes {
            return Err(Error::TooLarge {
                limit: self.options.max_bytes,
            });
        }

        #[cfg(feature = "pdf")]
        {
            if bytes.starts_with(b"%PDF-") {
                return pdf_extract::extract_text_from_mem(bytes)
                    .map_err(|e| Error::Pdf(e.to_string()));
            }
        }

        decode_text(bytes)
    }

    /// Fetch a page and return its transcoded HTML.
    pub fn fetch_html(&self, url: &str) -> Result<String> {
        let url = parse_page_url(url)?;
        let limit = self.options.max_bytes;

        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        if response
            .content_length()
            .is_some_and(|len| !usize::try_from(len).is_ok_and(|len| len <= limit))
        {
            return Err(Error::TooLarge { limit });
        }

        // Read one byte past the limit to detect oversized bodies without a length header
        let mut body = Vec::new();
        response
            .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
            .read_to_end(&mut body)?;
        if body.len() > limit {
            return Err(Error::TooLarge { limit });
        }

        debug!(url = %url, bytes = body.len(), "fetched page");
        Ok(transcode_html(&body))
    }

    /// Fetch a page and return the text of its paragraphs.
    pub fn fetch_paragraphs(&self, url: &str) -> Result<String> {
        let html = self.fetch_html(url)?;
        Ok(paragraph_text(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> SourceReader {
        SourceReader::new(FetchOptions::default()).unwrap_or_else(|e| panic!("client: {e}"))
    }

    #[test]
    fn from_choice_maps_discriminator() {
        let text = Some("hello".to_string());
        let file = Some(b"bytes".to_vec());
        let url = Some("https://example.com".to_string());

        assert_eq!(
            Source::from_choice(1, text.clone(), file.clone(), url.clone()),
            Some(Source::Text("hello".to_string()))
        );
        assert_eq!(
            Source::from_choice(2, text.clone(), file.clone(), url.clone()),
            Some(Source::File(b"bytes".to_vec()))
        );
        assert_eq!(
            Source::from_choice(3, text.clone(), file.clone(), url.clone()),
            Some(Source::Url("https://example.com".to_string()))
        );
        assert_eq!(Source::from_choice(4, text, file, url), None);
    }

    #[test]
    fn from_choice_with_missing_field_is_none() {
        assert_eq!(Source::from_choice(2, Some("text".to_string()), None, None), None);
    }

    #[test]
    fn text_source_passes_through() {
        let text = reader().read(&Source::Text("Plain text.".to_string()));
        assert_eq!(text.ok().as_deref(), Some("Plain text."));
    }

    #[test]
    fn file_source_is_decoded() {
        let text = reader().read(&Source::File("Caf\u{e9} society.".as_bytes().to_vec()));
        assert_eq!(text.ok().as_deref(), Some("Café society."));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let reader = SourceReader::new(FetchOptions {
            max_bytes: 4,
            ..FetchOptions::default()
        })
        .unwrap_or_else(|e| panic!("client: {e}"));

        let err = reader.read(&Source::File(b"too long".to_vec()));
        assert!(matches!(err, Err(Error::TooLarge { limit: 4 })));
    }

    #[test]
    fn undecodable_file_reads_as_empty() {
        let text = reader().read_or_empty(&Source::File(vec![0xC3, 0x28, 0xFF]));
        assert!(text.is_empty());
    }

    #[test]
    fn invalid_url_is_rejected_before_any_request() {
        let err = reader().read(&Source::Url("not a url".to_string()));
        assert!(matches!(err, Err(Error::InvalidUrl(_))));
    }
}
