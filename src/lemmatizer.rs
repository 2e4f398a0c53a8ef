//! Lemmatization (stage 13) and the line pairing it relies on.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::cleanup::tokens;
use crate::config::ResourceConfig;
use crate::dictionary::read_required;
use crate::error::ResourceError;

/// Line of text to per-token lemmas.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, line: &str) -> Vec<String>;
}

/// Lexicon lookup lemmatizer. Tokens missing from the lexicon are their own
/// lemma.
#[derive(Debug, Clone, Default)]
pub struct LexiconLemmatizer {
    lemmas: HashMap<String, String>,
}

impl LexiconLemmatizer {
    /// Load a `lemma<TAB>form` lexicon, one pair per line.
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        let path = config.lemma_list_path();
        let content = read_required(&path, "lemma lexicon")?;
        let lemmatizer = Self::parse(&content);
        info!(forms = lemmatizer.len(), path = %path.display(), "loaded lemma lexicon");
        Ok(lemmatizer)
    }

    pub fn parse(content: &str) -> Self {
        let mut lemmas: HashMap<String, String> = HashMap::new();
        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(lemma), Some(form)) = (fields.next(), fields.next()) else {
                debug!(line, "skipping malformed lexicon line");
                continue;
            };
            // First entry for a form wins.
            lemmas
                .entry(form_key(form.trim()))
                .or_insert_with(|| lemma.trim().nfc().collect());
        }
        Self { lemmas }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            lemmas: pairs
                .into_iter()
                .map(|(form, lemma)| (form_key(form), lemma.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatizer for LexiconLemmatizer {
    fn lemmatize(&self, line: &str) -> Vec<String> {
        tokens(line)
            .map(|token| {
                self.lemmas
                    .get(&form_key(token))
                    .cloned()
                    .unwrap_or_else(|| token.to_string())
            })
            .collect()
    }
}

fn form_key(form: &str) -> String {
    form.nfc().collect::<String>().to_lowercase()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on universal line breaks. `\r\n` counts once, a trailing break does
/// not open an empty last line, and `""` has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            end += 1;
        }
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Pair the original document's lines with the corrected text's lines by
/// position, lemmatize each corrected line and join with `\n`.
///
/// Lines past the shorter of the two sequences are dropped. The original
/// line only decides how many lines survive; its text is not used.
pub fn lemmatize_lines(lemmatizer: &dyn Lemmatizer, original: &str, corrected: &str) -> String {
    let original_lines = split_lines(original);
    let corrected_lines = split_lines(corrected);
    if original_lines.len() != corrected_lines.len() {
        debug!(
            original = original_lines.len(),
            corrected = corrected_lines.len(),
            "line counts differ; truncating to the shorter"
        );
    }
    let paired = original_lines.len().min(corrected_lines.len());

    let lemmatized: Vec<String> = corrected_lines[..paired]
        .par_iter()
        .map(|line| lemmatizer.lemmatize(line).join(" "))
        .collect();
    lemmatized.join("\n")
}
