//! Tokenization and normalization.
//!
//! Produces the sentence list and the normalized content-word list that the
//! scorer and the selector share. Both come from the same pass so every
//! scored word is findable in some sentence.

use unicode_segmentation::UnicodeSegmentation;

use super::sentences::split_sentences;
use super::stopwords::StopwordFilter;
use crate::patterns::IDEOGRAPHS;
use crate::types::{Sentence, Token};

/// Output of [`Tokenizer::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Sentences in document order.
    pub sentences: Vec<Sentence>,

    /// Every non-whitespace token, flagged.
    pub tokens: Vec<Token>,

    /// Content words in document order: lower-cased, no stopwords, no
    /// punctuation, no words below the minimum length. Han ideographs are
    /// exempt from the length limit.
    pub words: Vec<String>,
}

impl Normalized {
    /// Whether nothing can be summarized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty() || self.words.is_empty()
    }
}

/// Splits documents into sentences and content words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    min_word_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopwordFilter::default(), 2)
    }
}

impl Tokenizer {
    /// Create a tokenizer with a stopword set and a minimum word length in
    /// characters.
    #[must_use]
    pub fn new(stopwords: StopwordFilter, min_word_len: usize) -> Self {
        Self {
            stopwords,
            min_word_len,
        }
    }

    /// The stopword set in use.
    #[must_use]
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    fn is_content_word(&self, token: &Token) -> bool {
        token.is_content()
            && (token.text.chars().count() >= self.min_word_len
                || IDEOGRAPHS.is_match(&token.text))
    }

    /// Flag every non-whitespace token in `text`.
    #[must_use]
    pub fn tokenize(&self, text: &str, sentence: usize) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| {
                let lower = piece.to_lowercase();
                Token {
                    is_stopword: self.stopwords.is_stopword(&lower),
                    is_punctuation: !lower.chars().any(char::is_alphanumeric),
                    text: lower,
                    sentence,
                }
            })
            .collect()
    }

    /// Split a document into sentences and normalized content words.
    ///
    /// Empty or whitespace-only input yields an empty result.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Normalized {
        let mut normalized = Normalized::default();

        for (index, span) in split_sentences(text).into_iter().enumerate() {
            let sentence_text = &text[span.start..span.end];
            let tokens = self.tokenize(sentence_text, index);

            let words: Vec<String> = tokens
                .iter()
                .filter(|t| self.is_content_word(t))
                .map(|t| t.text.clone())
                .collect();

            normalized.words.extend(words.iter().cloned());
            normalized.tokens.extend(tokens);
            normalized.sentences.push(Sentence {
                text: sentence_text.to_string(),
                index,
                start: span.start,
                end: span.end,
                words,
            });
        }

        normalized
    }
}
