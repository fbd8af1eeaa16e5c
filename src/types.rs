//! Value types shared by the summarization stages.

use serde::{Deserialize, Serialize};

/// A word-boundary token from the document.
///
/// `text` is lower-cased; the original spelling lives in the owning
/// [`Sentence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lower-cased token text.
    pub text: String,

    /// Whether the token is in the stopword set.
    pub is_stopword: bool,

    /// Whether the token contains no letters or digits.
    pub is_punctuation: bool,

    /// Original order index of the sentence containing the token.
    pub sentence: usize,
}

impl Token {
    /// Returns `true` if the token carries topical content.
    #[must_use]
    pub fn is_content(&self) -> bool {
        !self.is_stopword && !self.is_punctuation
    }
}

/// A sentence span of the source document.
///
/// `text` is always `document[start..end]`, trimmed of surrounding
/// whitespace, so selected sentences are verbatim substrings of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Verbatim sentence text.
    pub text: String,

    /// Position of the sentence in the document (0-based).
    pub index: usize,

    /// Byte offset of the first character in the document.
    pub start: usize,

    /// Byte offset one past the last character in the document.
    pub end: usize,

    /// Normalized content words of the sentence, in order.
    #[serde(skip)]
    pub words: Vec<String>,
}

/// A scored vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Normalized word.
    pub word: String,

    /// Non-negative importance score.
    pub score: f64,

    /// Number of occurrences in the document.
    pub frequency: usize,

    /// Position of the word's first occurrence in the normalized word list.
    pub first_occurrence: usize,
}
