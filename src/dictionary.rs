//! Portuguese spelling dictionary for the correction stage.
//!
//! Combines a Hunspell dictionary (loaded with `zspell`) with an optional
//! word frequency list. A word is known if EITHER source accepts it; the
//! frequency list ranks correction candidates.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{info, warn};
use unicode_normalization::UnicodeNormalization;
use zspell::Dictionary;

use crate::config::ResourceConfig;
use crate::error::ResourceError;

/// Letters tried when generating edit candidates.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzáàâãçéêíóôõúü";

/// Longer words only get edit-distance-1 candidates.
const MAX_EDIT2_CHARS: usize = 20;

/// "Is this a known word" and "what should it have been".
pub trait SpellChecker: Send + Sync {
    fn is_known(&self, word: &str) -> bool;

    /// Best replacement for an unknown word, or `None` when there is no
    /// suggestion.
    fn correction(&self, word: &str) -> Option<String>;
}

/// Hunspell + frequency list spell checker.
pub struct Speller {
    hunspell: Option<Dictionary>,
    frequencies: HashMap<String, u64>,
}

impl Speller {
    /// Load the Hunspell pair (required) and the frequency list (optional).
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        let hunspell = load_hunspell(config)?;
        let frequencies = load_word_list(&config.word_list_path())?;
        let speller = Self {
            hunspell: Some(hunspell),
            frequencies,
        };
        info!("{}", speller.stats());
        Ok(speller)
    }

    /// Frequency list only, no Hunspell dictionary.
    pub fn from_word_counts<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut frequencies = HashMap::new();
        for (word, count) in words {
            *frequencies.entry(lookup_key(word.as_ref())).or_insert(0) += count;
        }
        Self {
            hunspell: None,
            frequencies,
        }
    }

    /// Get stats about loaded sources
    pub fn stats(&self) -> String {
        format!(
            "Spelling dictionary loaded: hunspell={}, frequency_words={}",
            self.hunspell.is_some(),
            self.frequencies.len()
        )
    }

    fn hunspell_accepts(&self, word: &str) -> bool {
        self.hunspell.as_ref().is_some_and(|d| d.check_word(word))
    }

    /// Highest frequency wins, ties go to the alphabetically first word.
    fn consider(&self, best: &mut Option<(u64, String)>, candidate: String, with_hunspell: bool) {
        let freq = match self.frequencies.get(&candidate) {
            Some(freq) => *freq,
            None if with_hunspell && self.hunspell_accepts(&candidate) => 0,
            None => return,
        };
        let better = match best {
            None => true,
            Some((best_freq, best_word)) => match freq.cmp(best_freq) {
                Ordering::Greater => true,
                Ordering::Equal => candidate < *best_word,
                Ordering::Less => false,
            },
        };
        if better {
            *best = Some((freq, candidate));
        }
    }
}

impl SpellChecker for Speller {
    fn is_known(&self, word: &str) -> bool {
        let key = lookup_key(word);
        self.frequencies.contains_key(&key)
            || self.hunspell_accepts(word)
            || (key != word && self.hunspell_accepts(&key))
    }

    fn correction(&self, word: &str) -> Option<String> {
        // Numbers are never spelling mistakes.
        if word.is_empty() || word.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let key = lookup_key(word);

        let first = edits1(&key);
        let mut best = None;
        for candidate in first.iter().cloned() {
            self.consider(&mut best, candidate, true);
        }
        if let Some((_, found)) = best.take() {
            return Some(found);
        }

        // Second ring is only checked against the frequency list; running
        // Hunspell over it is too slow.
        if self.frequencies.is_empty() || key.chars().count() > MAX_EDIT2_CHARS {
            return None;
        }
        for edit in &first {
            for candidate in edits1(edit) {
                self.consider(&mut best, candidate, false);
            }
        }
        best.map(|(_, word)| word)
    }
}

/// Lowercased NFC form used for every lookup.
fn lookup_key(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// All strings one delete, transpose, replace or insert away from `word`.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = HashSet::new();
    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        if !right.is_empty() {
            out.insert(left.iter().chain(&right[1..]).collect());
        }
        if right.len() > 1 {
            let mut s: String = left.iter().collect();
            s.push(right[1]);
            s.push(right[0]);
            s.extend(&right[2..]);
            out.insert(s);
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                let mut s: String = left.iter().collect();
                s.push(c);
                s.extend(&right[1..]);
                out.insert(s);
            }
            let mut s: String = left.iter().collect();
            s.push(c);
            s.extend(right);
            out.insert(s);
        }
    }
    out
}

/// Load the Hunspell pair using the zspell builder pattern
fn load_hunspell(config: &ResourceConfig) -> Result<Dictionary, ResourceError> {
    let aff_path = config.aff_path();
    let dic_path = config.dic_path();
    let aff_content = read_required(&aff_path, "Hunspell affix file")?;
    let dic_content = read_required(&dic_path, "Hunspell dictionary file")?;

    zspell::builder()
        .config_str(&aff_content)
        .dict_str(&dic_content)
        .build()
        .map_err(|e| ResourceError::Hunspell {
            name: config.hunspell.clone(),
            message: e.to_string(),
        })
}

/// Load `word [count]` lines; a missing file just means no frequencies.
fn load_word_list(path: &Path) -> Result<HashMap<String, u64>, ResourceError> {
    if !path.exists() {
        warn!(path = %path.display(), "word frequency list not found; corrections will not be ranked");
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else { continue };
        let count = parts.next().and_then(|c| c.parse::<u64>().ok()).unwrap_or(1);
        *words.entry(lookup_key(word)).or_insert(0) += count;
    }
    info!(words = words.len(), "loaded word frequency list");
    Ok(words)
}

pub(crate) fn read_required(path: &Path, kind: &'static str) -> Result<String, ResourceError> {
    if !path.exists() {
        return Err(ResourceError::Missing {
            kind,
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
