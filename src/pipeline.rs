use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::cleanup::{
    collapse_whitespace, strip_emoji, strip_links, strip_markup, strip_punctuation,
    strip_special_chars, tokens,
};
use crate::dictionary::SpellChecker;
use crate::lemmatizer::lemmatize_lines;
use crate::lexicon::{expand_chat_speak, spell_out_numerals};
use crate::linguistics::Linguistics;
use crate::stemmer::stem_text;
use crate::trace::{DocumentKind, Stage, Trace};

/// Runs the thirteen normalization stages over whole documents.
pub struct Normalizer {
    linguistics: Linguistics,
}

impl Normalizer {
    pub fn new(linguistics: Linguistics) -> Self {
        Self { linguistics }
    }

    pub fn linguistics(&self) -> &Linguistics {
        &self.linguistics
    }

    /// Normalize `document` and return every stage's output in order.
    pub fn normalize(&self, document: &str) -> Trace {
        self.normalize_as(document, DocumentKind::default())
    }

    /// Same as [`normalize`](Self::normalize), tagging the trace with `kind`.
    pub fn normalize_as(&self, document: &str, kind: DocumentKind) -> Trace {
        let span = debug_span!("normalize", ?kind, bytes = document.len());
        let _guard = span.enter();

        let ling = &self.linguistics;
        let mut trace = Trace::new(kind);

        let mut current = run(&mut trace, Stage::StripMarkup, strip_markup(document));
        current = run(&mut trace, Stage::StripLinks, strip_links(&current));
        current = run(&mut trace, Stage::StripEmoji, strip_emoji(&current));
        current = run(&mut trace, Stage::RemoveStopwords, ling.stopwords.remove_from(&current));
        current = run(&mut trace, Stage::StripPunctuation, strip_punctuation(&current));
        current = run(&mut trace, Stage::StripSpecialChars, strip_special_chars(&current));
        current = run(&mut trace, Stage::CollapseWhitespace, collapse_whitespace(&current));
        current = run(&mut trace, Stage::ExpandChatSpeak, expand_chat_speak(&current));
        current = run(&mut trace, Stage::SpellOutNumerals, spell_out_numerals(&current));
        current = run(&mut trace, Stage::Lowercase, current.to_lowercase());
        let corrected = run(
            &mut trace,
            Stage::SpellCorrect,
            correct_spelling(&*ling.speller, &current),
        );

        // Stemming is recorded only; lemmatization starts again from the
        // spell-corrected text.
        run(&mut trace, Stage::Stem, stem_text(&*ling.stemmer, &corrected));
        run(
            &mut trace,
            Stage::Lemmatize,
            lemmatize_lines(&*ling.lemmatizer, document, &corrected),
        );

        trace
    }
}

fn run(trace: &mut Trace, stage: Stage, output: String) -> String {
    debug!(stage = stage.label(), chars = output.chars().count(), "stage done");
    trace.record(stage, output.clone());
    output
}

/// Replace unknown tokens with the checker's correction, keeping the token
/// when there is no suggestion.
pub fn correct_spelling(speller: &dyn SpellChecker, text: &str) -> String {
    let words: Vec<&str> = tokens(text).collect();
    let corrected: Vec<String> = words
        .par_iter()
        .map(|&word| {
            if speller.is_known(word) {
                return word.to_string();
            }
            match speller.correction(word) {
                Some(fixed) => fixed,
                None => word.to_string(),
            }
        })
        .collect();
    corrected.join(" ")
}
