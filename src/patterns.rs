//! Compiled regex patterns used by sentence segmentation and tokenization.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single capital-letter initial such as `J.` in `J. R. Tolkien`.
pub static INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}\.$").expect("INITIAL regex"));

/// Matches dotted initialisms such as `e.g.`, `i.e.`, `U.S.` or `a.m.`.
pub static INITIALISM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{L}\.){2,}$").expect("INITIALISM regex"));

/// Matches tokens made only of Han ideographs. Word segmentation yields one
/// ideograph per token, and each carries a whole morpheme.
pub static IDEOGRAPHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Han}+$").expect("IDEOGRAPHS regex"));

/// Matches runs of whitespace, used to collapse paragraph text.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Common English abbreviations that end in a period but do not end a
/// sentence. Compared lower-cased, without the trailing period.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "lt", "sgt",
    "capt", "gov", "sen", "rep", "vs", "approx", "dept", "est", "fig", "vol", "pp",
    "inc", "ltd", "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "cf", "al",
];
