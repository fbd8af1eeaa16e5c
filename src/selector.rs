//! Salient sentence selection.
//!
//! A sentence is relevant when it contains at least one ranked word. The
//! output keeps document order among the relevant sentences, never score
//! order, and stops at the requested limit.

use rustc_hash::FxHashSet;

use crate::options::MatchMode;
use crate::types::Sentence;

fn is_relevant<S: AsRef<str>>(
    sentence: &Sentence,
    ranked_set: &FxHashSet<&str>,
    ranked_words: &[S],
    mode: MatchMode,
) -> bool {
    match mode {
        MatchMode::Token => sentence
            .words
            .iter()
            .any(|word| ranked_set.contains(word.as_str())),
        MatchMode::Substring => {
            let lower = sentence.text.to_lowercase();
            ranked_words.iter().any(|word| lower.contains(word.as_ref()))
        }
    }
}

/// Pick up to `limit` relevant sentences in document order.
///
/// Sentences whose text repeats an already selected sentence are skipped.
/// Returns an empty vector when `limit` is zero, the ranking is empty or no
/// sentence matches.
#[must_use]
pub fn select<'a, S: AsRef<str>>(
    sentences: &'a [Sentence],
    ranked_words: &[S],
    limit: usize,
    mode: MatchMode,
) -> Vec<&'a Sentence> {
    let mut selected: Vec<&Sentence> = Vec::new();
    if limit == 0 || ranked_words.is_empty() {
        return selected;
    }

    let ranked_set: FxHashSet<&str> = match mode {
        MatchMode::Token => ranked_words.iter().map(|word| word.as_ref()).collect(),
        MatchMode::Substring => FxHashSet::default(),
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for sentence in sentences {
        if selected.len() >= limit {
            break;
        }
        if seen.contains(sentence.text.as_str()) {
            continue;
        }
        if is_relevant(sentence, &ranked_set, ranked_words, mode) {
            seen.insert(sentence.text.as_str());
            selected.push(sentence);
        }
    }

    selected
}
