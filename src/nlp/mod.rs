//! Natural language processing components.
//!
//! Sentence segmentation, tokenization and stopword filtering.

pub mod sentences;
pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{Normalized, Tokenizer};
