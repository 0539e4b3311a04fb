//! Stemming seam for morphological matching.
//!
//! The extractor only needs `stem(word) -> word`, so the trait stays narrow
//! and any deterministic stemming algorithm can be swapped in without
//! touching extraction logic.

use rust_stemmers::{Algorithm, Stemmer};

/// A deterministic morphological reducer: the same input always yields the
/// same stem, and common English inflections of a root coincide.
pub trait Stem: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Default stemmer: Snowball English (Porter2).
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

// Stemmer implements neither Debug nor Clone; keep the wrapper printable.
impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish()
    }
}

impl Stem for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).to_string()
    }
}
