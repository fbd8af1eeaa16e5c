//! Configuration options for summarization and input acquisition.
//!
//! `Options` controls the summarization pipeline; `FetchOptions` bounds the
//! I/O done by [`SourceReader`](crate::source::SourceReader) before the
//! pipeline runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of sentences returned when the caller does not ask for a count.
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// How term weights are computed over the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weighting {
    /// Raw term frequency across the whole document.
    ///
    /// With a single document an inverse document frequency is the same
    /// constant for every term, so frequency is the only signal.
    #[default]
    TermFrequency,

    /// Term frequency scaled by a smoothed IDF computed with every sentence
    /// treated as its own document.
    SentenceTfIdf,
}

/// How a ranked word is looked up inside a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// The word must equal one of the sentence's normalized content words.
    #[default]
    Token,

    /// The word may appear anywhere in the lower-cased sentence text.
    ///
    /// Higher recall, but "cat" also matches "concatenate".
    Substring,
}

/// Configuration options for summarization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use tf_summarizer::{MatchMode, Options};
///
/// let options = Options {
///     num_sentences: 3,
///     match_mode: MatchMode::Substring,
///     ..Options::default()
/// };
/// assert_eq!(options.language, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Maximum number of sentences in the summary.
    ///
    /// Default: `5`
    pub num_sentences: usize,

    /// ISO 639-1 code selecting the stopword list.
    ///
    /// Unknown codes fall back to English.
    ///
    /// Default: `"en"`
    pub language: String,

    /// Extra stopwords added on top of the language list.
    ///
    /// Default: empty
    pub extra_stopwords: Vec<String>,

    /// Minimum length of a content word, in characters.
    ///
    /// Default: `2`
    pub min_word_len: usize,

    /// Term weighting scheme.
    ///
    /// Default: [`Weighting::TermFrequency`]
    pub weighting: Weighting,

    /// Sentence matching mode.
    ///
    /// Default: [`MatchMode::Token`]
    pub match_mode: MatchMode,

    /// Only consider this many of the highest-ranked words when testing
    /// sentences. `None` uses the whole ranking.
    ///
    /// Default: `None`
    pub top_words: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            min_word_len: 2,
            weighting: Weighting::TermFrequency,
            match_mode: MatchMode::Token,
            top_words: None,
        }
    }
}

/// Limits applied while reading an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Total time allowed for one HTTP request, connect included.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Maximum accepted body or file size, in bytes.
    ///
    /// Default: `5 MiB`
    pub max_bytes: usize,

    /// `User-Agent` header sent with page requests.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_bytes: 5 * 1024 * 1024,
            user_agent: concat!("tf-summarizer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
