//! The summarization pipeline.
//!
//! normalize → score → select. A [`Summarizer`] owns everything the
//! pipeline needs (stopword set, options) and never mutates it, so one
//! instance can be built at startup and shared across threads.

use tracing::debug;

use crate::nlp::{StopwordFilter, Tokenizer};
use crate::options::Options;
use crate::result::Summary;
use crate::scoring::score_terms;
use crate::selector::select;

/// Extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    options: Options,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Summarizer {
    /// Build a summarizer, loading the stopword list named by
    /// `options.language` plus any `extra_stopwords`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let mut stopwords = StopwordFilter::new(&options.language);
        stopwords.extend(&options.extra_stopwords);
        Self::with_stopwords(stopwords, options)
    }

    /// Build a summarizer around a caller-supplied stopword set.
    ///
    /// `options.language` and `options.extra_stopwords` are not consulted.
    #[must_use]
    pub fn with_stopwords(stopwords: StopwordFilter, options: Options) -> Self {
        Self {
            tokenizer: Tokenizer::new(stopwords, options.min_word_len),
            options,
        }
    }

    /// Options this summarizer was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Summarize `text` with the configured sentence limit.
    #[must_use]
    pub fn summarize(&self, text: &str) -> Summary {
        self.summarize_n(text, self.options.num_sentences)
    }

    /// Summarize `text`, selecting at most `num_sentences` sentences.
    ///
    /// Empty input, input without content words and `num_sentences == 0`
    /// all produce an empty summary.
    #[must_use]
    pub fn summarize_n(&self, text: &str, num_sentences: usize) -> Summary {
        if num_sentences == 0 {
            return Summary::empty(0);
        }

        let normalized = self.tokenizer.normalize(text);
        if normalized.is_empty() {
            debug!(
                sentences = normalized.sentences.len(),
                "no content words, nothing to summarize"
            );
            return Summary::empty(num_sentences);
        }

        let terms = score_terms(&normalized, self.options.weighting);
        let considered = self.options.top_words.unwrap_or(terms.len()).min(terms.len());
        let ranked: Vec<&str> = terms[..considered].iter().map(|t| t.word.as_str()).collect();

        let sentences: Vec<_> = select(
            &normalized.sentences,
            &ranked,
            num_sentences,
            self.options.match_mode,
        )
        .into_iter()
        .cloned()
        .collect();

        debug!(
            sentences = normalized.sentences.len(),
            words = normalized.words.len(),
            vocabulary = terms.len(),
            considered,
            selected = sentences.len(),
            "summarized document"
        );

        Summary {
            sentences,
            terms,
            requested: num_sentences,
        }
    }
}
