//! Portuguese stemming (stage 12).

use rust_stemmers::{Algorithm, Stemmer as SnowballImpl};

use crate::cleanup::tokens;

/// Token to stem. Always returns something, possibly the token itself.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball Portuguese stemmer.
pub struct SnowballStemmer {
    inner: SnowballImpl,
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::portuguese()
    }
}

impl SnowballStemmer {
    pub fn portuguese() -> Self {
        Self {
            inner: SnowballImpl::create(Algorithm::Portuguese),
        }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }
}

/// Stem every whitespace-separated token independently.
pub fn stem_text(stemmer: &dyn Stemmer, text: &str) -> String {
    tokens(text)
        .map(|word| stemmer.stem(word))
        .collect::<Vec<_>>()
        .join(" ")
}
