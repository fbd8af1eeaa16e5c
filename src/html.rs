//! Paragraph text extraction from HTML pages.

use dom_query::{Document, Selection};

use crate::patterns::WHITESPACE_RUN;

/// Text of every `<p>` element, in document order, joined by single spaces.
///
/// Whitespace inside a paragraph is collapsed and empty paragraphs are
/// skipped. A page without paragraphs yields an empty string.
///
/// # Examples
///
/// ```
/// use tf_summarizer::html::paragraph_text;
///
/// let html = "<html><body><h1>Title</h1><p>First.</p><div><p>Second.</p></div></body></html>";
/// assert_eq!(paragraph_text(html), "First. Second.");
/// ```
#[must_use]
pub fn paragraph_text(html: &str) -> String {
    let doc = Document::from(html);

    let mut paragraphs: Vec<String> = Vec::new();
    for node in doc.select("p").nodes() {
        let p = Selection::from(*node);
        let text = p.text();
        let text = WHITESPACE_RUN.replace_all(text.trim(), " ");
        if !text.is_empty() {
            paragraphs.push(text.into_owned());
        }
    }

    paragraphs.join(" ")
}
