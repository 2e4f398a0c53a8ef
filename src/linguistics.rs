//! The linguistic services the pipeline consults, initialized once.

use tracing::info;

use crate::config::ResourceConfig;
use crate::dictionary::{SpellChecker, Speller};
use crate::error::ResourceError;
use crate::lemmatizer::{Lemmatizer, LexiconLemmatizer};
use crate::stemmer::{SnowballStemmer, Stemmer};
use crate::stopwords::StopwordSet;

/// Ready-to-use handles for stopwords, spelling, stemming and lemmas.
pub struct Linguistics {
    pub stopwords: StopwordSet,
    pub speller: Box<dyn SpellChecker>,
    pub stemmer: Box<dyn Stemmer>,
    pub lemmatizer: Box<dyn Lemmatizer>,
}

impl Linguistics {
    pub fn new(
        stopwords: StopwordSet,
        speller: impl SpellChecker + 'static,
        stemmer: impl Stemmer + 'static,
        lemmatizer: impl Lemmatizer + 'static,
    ) -> Self {
        Self {
            stopwords,
            speller: Box::new(speller),
            stemmer: Box::new(stemmer),
            lemmatizer: Box::new(lemmatizer),
        }
    }

    /// Load the Portuguese defaults from `config`. Fails if the Hunspell
    /// pair or the lemma lexicon cannot be read.
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        info!(dict_dir = %config.dict_dir.display(), "loading linguistic resources");
        let stopwords = StopwordSet::portuguese();
        let speller = Speller::load(config)?;
        let lemmatizer = LexiconLemmatizer::load(config)?;
        info!(stopwords = stopwords.len(), "linguistic resources ready");
        Ok(Self::new(
            stopwords,
            speller,
            SnowballStemmer::portuguese(),
            lemmatizer,
        ))
    }
}
