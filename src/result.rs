//! Summarization output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Sentence, WeightedTerm};

/// An extractive summary.
///
/// Sentences are verbatim spans of the input, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order.
    pub sentences: Vec<Sentence>,

    /// Ranked vocabulary that drove the selection, best first.
    pub terms: Vec<WeightedTerm>,

    /// Sentence limit the summary was built with.
    pub requested: usize,
}

impl Summary {
    /// An empty summary for a request of `requested` sentences.
    #[must_use]
    pub fn empty(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    /// Whether no sentence was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of selected sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// The summary as one string, sentences joined by single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
