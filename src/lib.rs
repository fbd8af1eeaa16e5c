//! # tf-summarizer
//!
//! Extractive text summarization by term-frequency sentence selection.
//!
//! The pipeline splits a document into sentences and content words
//! (stopwords and punctuation removed), ranks the words by frequency, and
//! returns the first N sentences, in document order, that contain a ranked
//! word. Every returned sentence is a verbatim span of the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use tf_summarizer::summarize;
//!
//! let text = "Cats are great pets. Cats are independent animals. Dogs are loyal companions.";
//! let summary = summarize(text, 2);
//! assert_eq!(summary, "Cats are great pets. Cats are independent animals.");
//! ```
//!
//! ## Input Sources
//!
//! Text can also come from an uploaded file or a web page. A
//! [`SourceReader`] resolves a [`Source`] to a string, with a request
//! timeout and a size cap; unreadable sources become an empty string and
//! are never summarized.
//!
//! ```rust,no_run
//! use tf_summarizer::{summarize_source, FetchOptions, Source, SourceReader, Summarizer};
//!
//! let reader = SourceReader::new(FetchOptions::default())?;
//! let summarizer = Summarizer::default();
//! let source = Source::Url("https://en.wikipedia.org/wiki/Rust_(programming_language)".into());
//! if let Some(summary) = summarize_source(&reader, &summarizer, &source) {
//!     println!("{summary}");
//! }
//! # Ok::<(), tf_summarizer::Error>(())
//! ```

mod error;
mod options;
mod patterns;
mod result;
mod types;

/// Sentence segmentation, tokenization and stopword filtering.
pub mod nlp;

/// Term weighting and ranking.
pub mod scoring;

/// Salient sentence selection.
pub mod selector;

/// The summarization pipeline.
pub mod summarizer;

/// Character encoding detection and decoding.
pub mod encoding;

/// Paragraph text extraction from HTML.
pub mod html;

/// URL validation for page sources.
pub mod url_utils;

/// Input acquisition from text, files and web pages.
pub mod source;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{FetchOptions, MatchMode, Options, Weighting, DEFAULT_NUM_SENTENCES};
pub use result::Summary;
pub use source::{Source, SourceReader};
pub use summarizer::Summarizer;
pub use types::{Sentence, Token, WeightedTerm};

/// Summarizes `text` into at most `num_sentences` sentences.
///
/// Returns the selected sentences joined by single spaces, or an empty
/// string when nothing can be selected. Builds a fresh [`Summarizer`]; reuse
/// one when summarizing many documents.
///
/// # Example
///
/// ```rust
/// use tf_summarizer::summarize;
///
/// assert_eq!(summarize("   ", 5), "");
/// assert_eq!(summarize("Rust is fast. Rust is safe.", 0), "");
/// ```
#[must_use]
pub fn summarize(text: &str, num_sentences: usize) -> String {
    summarize_with_options(
        text,
        &Options {
            num_sentences,
            ..Options::default()
        },
    )
    .text()
}

/// Summarizes `text` with custom options, returning the structured result.
///
/// # Example
///
/// ```rust
/// use tf_summarizer::{summarize_with_options, MatchMode, Options};
///
/// let options = Options {
///     num_sentences: 1,
///     match_mode: MatchMode::Substring,
///     ..Options::default()
/// };
/// let summary = summarize_with_options("Rust is fast. Rust is safe.", &options);
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary.sentences[0].text, "Rust is fast.");
/// ```
#[must_use]
pub fn summarize_with_options(text: &str, options: &Options) -> Summary {
    Summarizer::new(options.clone()).summarize(text)
}

/// Reads `source` and summarizes it.
///
/// Returns `None` without running the summarizer when the source yields no
/// text (unreadable file, unreachable page, empty input).
#[must_use]
pub fn summarize_source(
    reader: &SourceReader,
    summarizer: &Summarizer,
    source: &Source,
) -> Option<Summary> {
    let text = reader.read_or_empty(source);
    if text.trim().is_empty() {
        return None;
    }
    Some(summarizer.summarize(&text))
}
