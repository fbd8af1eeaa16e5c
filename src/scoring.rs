//! Term weighting and ranking.
//!
//! The default weight is raw term frequency. Inverse document frequency
//! over a single document is the same constant for every term, so it adds
//! no signal; [`Weighting::SentenceTfIdf`] instead treats each sentence as a
//! document to make an IDF factor meaningful.

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::nlp::Normalized;
use crate::options::Weighting;
use crate::types::{Sentence, WeightedTerm};

/// Count term frequencies, keeping first-occurrence order.
fn term_frequencies<S: AsRef<str>>(words: &[S]) -> Vec<WeightedTerm> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut terms: Vec<WeightedTerm> = Vec::new();

    for (position, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if let Some(&slot) = index.get(word) {
            terms[slot].frequency += 1;
        } else {
            index.insert(word, terms.len());
            terms.push(WeightedTerm {
                word: word.to_string(),
                score: 0.0,
                frequency: 1,
                first_occurrence: position,
            });
        }
    }

    terms
}

/// Count the sentences each word occurs in, in a single pass.
fn sentence_frequencies(sentences: &[Sentence]) -> FxHashMap<&str, usize> {
    let mut frequencies: FxHashMap<&str, usize> = FxHashMap::default();
    for sentence in sentences {
        let distinct: FxHashSet<&str> = sentence.words.iter().map(String::as_str).collect();
        for word in distinct {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Descending score, ties broken by earlier first occurrence.
fn by_rank(a: &WeightedTerm, b: &WeightedTerm) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(a.first_occurrence.cmp(&b.first_occurrence))
}

/// Score every distinct content word of a normalized document, best first.
///
/// Returns an empty vector when the document has no content words.
#[must_use]
pub fn score_terms(normalized: &Normalized, weighting: Weighting) -> Vec<WeightedTerm> {
    let mut terms = term_frequencies(&normalized.words);

    match weighting {
        Weighting::TermFrequency => {
            for term in &mut terms {
                term.score = term.frequency as f64;
            }
        }
        Weighting::SentenceTfIdf => {
            let n = normalized.sentences.len() as f64;
            let frequencies = sentence_frequencies(&normalized.sentences);
            for term in &mut terms {
                let df = frequencies.get(term.word.as_str()).copied().unwrap_or(0) as f64;
                // Smoothed IDF; stays positive even when every sentence has the term
                let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                term.score = term.frequency as f64 * idf;
            }
        }
    }

    terms.sort_by(by_rank);
    terms
}

/// Rank words by term frequency, most frequent first.
///
/// Equal frequencies keep first-occurrence order. An empty list ranks to
/// an empty list.
///
/// # Examples
///
/// ```
/// use tf_summarizer::scoring::rank_words;
///
/// let ranked = rank_words(&["pets", "cats", "dogs", "cats"]);
/// assert_eq!(ranked, vec!["cats", "pets", "dogs"]);
/// ```
#[must_use]
pub fn rank_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut terms = term_frequencies(words);
    for term in &mut terms {
        term.score = term.frequency as f64;
    }
    terms.sort_by(by_rank);
    terms.into_iter().map(|t| t.word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{StopwordFilter, Tokenizer};

    #[test]
    fn rank_words_orders_by_frequency() {
        let ranked = rank_words(&["a1", "b2", "b2", "c3", "c3", "c3"]);
        assert_eq!(ranked, vec!["c3", "b2", "a1"]);
    }

    #[test]
    fn rank_words_breaks_ties_by_first_occurrence() {
        let ranked = rank_words(&["zebra", "apple", "zebra", "apple", "mango"]);
        assert_eq!(ranked, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn rank_words_empty_input() {
        let ranked = rank_words::<&str>(&[]);
        assert!(ranked.is_empty());
    }

    #[test]
    fn term_frequency_scores_are_counts() {
        let tokenizer = Tokenizer::new(StopwordFilter::empty(), 2);
        let normalized = tokenizer.normalize("Cats nap. Cats play. Dogs bark.");
        let terms = score_terms(&normalized, Weighting::TermFrequency);

        assert_eq!(terms[0].word, "cats");
        assert_eq!(terms[0].score, 2.0);
        assert_eq!(terms[0].frequency, 2);
        assert_eq!(terms[1].word, "nap");
        assert!(terms.iter().all(|t| t.score >= 0.0));
    }

    #[test]
    fn sentence_tfidf_discounts_ubiquitous_terms() {
        let tokenizer = Tokenizer::new(StopwordFilter::empty(), 2);
        let normalized =
            tokenizer.normalize("Data flows. Data moves. Data rests here.");
        let terms = score_terms(&normalized, Weighting::SentenceTfIdf);

        let data = terms.iter().find(|t| t.word == "data").map(|t| t.score);
        let flows = terms.iter().find(|t| t.word == "flows").map(|t| t.score);
        // "data" appears three times but in every sentence; idf == 1
        assert_eq!(data, Some(3.0));
        let expected_flows = (4.0_f64 / 2.0).ln() + 1.0;
        assert!(flows.is_some_and(|s| (s - expected_flows).abs() < 1e-9));
    }

    #[test]
    fn repeated_word_counts_once_per_sentence() {
        let tokenizer = Tokenizer::new(StopwordFilter::empty(), 2);
        let normalized = tokenizer.normalize("Echo echo echo. Silence falls.");
        let frequencies = sentence_frequencies(&normalized.sentences);

        assert_eq!(frequencies.get("echo"), Some(&1));
        assert_eq!(frequencies.get("falls"), Some(&1));
        assert_eq!(frequencies.get("absent"), None);
    }

    #[test]
    fn score_terms_on_empty_document() {
        let normalized = Normalized::default();
        assert!(score_terms(&normalized, Weighting::TermFrequency).is_empty());
        assert!(score_terms(&normalized, Weighting::SentenceTfIdf).is_empty());
    }
}
