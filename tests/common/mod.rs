#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pt_text_clean::{
    Lemmatizer, LexiconLemmatizer, Linguistics, Normalizer, SpellChecker, Stemmer, StopwordSet,
};

/// Knows every word except those listed; corrects from a fixed table.
pub struct TableSpeller {
    pub unknown: Vec<&'static str>,
    pub fixes: Vec<(&'static str, &'static str)>,
}

impl SpellChecker for TableSpeller {
    fn is_known(&self, word: &str) -> bool {
        !self.unknown.iter().any(|u| *u == word)
    }

    fn correction(&self, word: &str) -> Option<String> {
        self.fixes
            .iter()
            .find(|(from, _)| *from == word)
            .map(|(_, to)| to.to_string())
    }
}

/// Keeps the first three characters.
pub struct PrefixStemmer;

impl Stemmer for PrefixStemmer {
    fn stem(&self, word: &str) -> String {
        word.chars().take(3).collect()
    }
}

/// Emits `<line>` as one lemma so tests can see line boundaries.
pub struct WholeLineLemmatizer;

impl Lemmatizer for WholeLineLemmatizer {
    fn lemmatize(&self, line: &str) -> Vec<String> {
        vec![format!("[{line}]")]
    }
}

pub fn speller() -> TableSpeller {
    TableSpeller {
        unknown: vec!["ol", "zzz"],
        fixes: vec![("ol", "olá")],
    }
}

pub fn normalizer_with(stopwords: &[&str]) -> Normalizer {
    Normalizer::new(Linguistics::new(
        StopwordSet::from_list(stopwords),
        speller(),
        PrefixStemmer,
        LexiconLemmatizer::from_pairs([("viu", "ver"), ("casas", "casa")]),
    ))
}

pub fn normalizer() -> Normalizer {
    normalizer_with(&["de", "a", "o"])
}

/// Minimal on-disk resource set: a three-word Hunspell pair and a
/// one-entry lemma lexicon.
pub fn write_resources(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("pt_BR.aff"), "SET UTF-8\n").unwrap();
    fs::write(dir.join("pt_BR.dic"), "3\ncasa\nazul\nvoce\n").unwrap();
    fs::write(dir.join("pt_lemmas.txt"), "você\tvoce\n").unwrap();
}
