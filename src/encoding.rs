//! Character encoding detection and decoding.
//!
//! Fetched pages are transcoded leniently using the charset declared in
//! their meta tags. Uploaded files are decoded strictly: a file that is not
//! valid text yields an error so the caller can report "no text extracted"
//! instead of summarizing replacement characters.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML page.
///
/// Looks for, in order, a byte-order mark, `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`, then
/// defaults to UTF-8. Only the first 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    let declared = capture(&CHARSET_META_RE, &head_str)
        .or_else(|| capture(&CONTENT_TYPE_CHARSET_RE, &head_str));

    declared
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .unwrap_or(UTF_8)
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than rejected.
///
/// # Examples
///
/// ```
/// use tf_summarizer::encoding::transcode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// assert!(transcode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

/// Decode uploaded file bytes as text.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding; otherwise the
/// bytes must be valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| Error::Decode(format!("input is not valid {}", encoding.name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_iso88591_from_meta_charset() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_charset_from_content_type() {
        let html = br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn default_to_utf8_when_no_charset() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn transcode_windows1252_html() {
        let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Hello\x94</body></html>";
        assert!(transcode_html(html).contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn transcode_html_replaces_invalid_bytes() {
        let result = transcode_html(b"<html><body>Test \xFF\xFE Invalid</body></html>");
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }

    #[test]
    fn decode_text_accepts_utf8() {
        assert_eq!(decode_text("Grüße aus Köln.".as_bytes()).ok().as_deref(), Some("Grüße aus Köln."));
    }

    #[test]
    fn decode_text_strips_utf8_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFHello.").ok().as_deref(), Some("Hello."));
    }

    #[test]
    fn decode_text_honours_utf16_bom() {
        let bytes = b"\xFF\xFEH\x00i\x00";
        assert_eq!(decode_text(bytes).ok().as_deref(), Some("Hi"));
    }

    #[test]
    fn decode_text_rejects_invalid_utf8() {
        let err = decode_text(b"Caf\xE9 au lait");
        assert!(matches!(err, Err(Error::Decode(_))));
    }
}
