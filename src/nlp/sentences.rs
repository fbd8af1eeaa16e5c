//! Sentence segmentation.
//!
//! Boundaries come from Unicode sentence segmentation (UAX #29). UAX #29
//! breaks after any period followed by a capitalised word, so a second pass
//! re-joins segments that end in a known abbreviation or a name initial.

use unicode_segmentation::UnicodeSegmentation;

use crate::patterns::{ABBREVIATIONS, INITIAL, INITIALISM};

/// A trimmed sentence span as byte offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first non-whitespace character.
    pub start: usize,
    /// Byte offset one past the last non-whitespace character.
    pub end: usize,
}

/// Split `text` into trimmed, non-empty sentence spans in document order.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<Span> {
    let segments: Vec<Span> = text
        .split_sentence_bound_indices()
        .filter_map(|(offset, segment)| trim_span(offset, segment))
        .collect();

    let mut spans: Vec<Span> = Vec::new();
    let mut pending: Option<Span> = None;

    for (i, segment) in segments.iter().enumerate() {
        let span = match pending.take() {
            Some(open) => Span {
                start: open.start,
                end: segment.end,
            },
            None => *segment,
        };

        // The last segment always closes a sentence, abbreviation or not
        let continues = segments.get(i + 1).is_some_and(|next| {
            continues_into(&text[span.start..span.end], &text[next.start..next.end])
        });

        if continues {
            pending = Some(span);
        } else {
            spans.push(span);
        }
    }

    spans
}

fn trim_span(offset: usize, segment: &str) -> Option<Span> {
    let trimmed_start = segment.trim_start();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return None;
    }
    let start = offset + (segment.len() - trimmed_start.len());
    Some(Span {
        start,
        end: start + trimmed.len(),
    })
}

fn strip_opening(word: &str) -> &str {
    word.trim_start_matches(|c: char| matches!(c, '(' | '"' | '\'' | '['))
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the segment boundary between `sentence` and `next` falls inside
/// an abbreviation rather than at a sentence end.
///
/// A single initial joins the next segment only in a name: it opens the
/// sentence, follows a capitalised word or another initial (`John F.`,
/// `R. R.`), or is followed by another initial (`J. R.`). Dotted
/// initialisms join only when lower-case (`e.g.`, `a.m.`); `U.S.` may end a
/// sentence.
fn continues_into(sentence: &str, next: &str) -> bool {
    let mut words = sentence.split_whitespace().rev().map(strip_opening);
    let Some(last) = words.next() else {
        return false;
    };

    if INITIAL.is_match(last) {
        let previous = words.next();
        let next_first = next.split_whitespace().next().map(strip_opening);
        return next_first.is_some_and(|word| INITIAL.is_match(word))
            || previous.is_none_or(|word| INITIAL.is_match(word) || is_capitalized(word));
    }

    if INITIALISM.is_match(last) {
        return last.chars().any(char::is_lowercase);
    }

    last.strip_suffix('.')
        .is_some_and(|word| ABBREVIATIONS.contains(&word.to_lowercase().as_str()))
}
