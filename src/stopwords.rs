//! Portuguese stopword filtering (stage 4).

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::cleanup::tokens;

/// A set of lowercase stopwords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::portuguese()
    }
}

impl StopwordSet {
    /// The Portuguese list shipped with the `stop-words` crate.
    pub fn portuguese() -> Self {
        Self {
            words: get(LANGUAGE::Portuguese).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Build from a custom list; entries are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop stopword tokens and rejoin the rest with single spaces.
    /// Token case is left untouched.
    pub fn remove_from(&self, text: &str) -> String {
        tokens(text)
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
