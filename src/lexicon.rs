//! Fixed substitution tables: chat abbreviations (stage 8) and a small set
//! of spelled-out numerals (stage 9).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::cleanup::tokens;

lazy_static! {
    static ref CHAT_WORDS: HashMap<&'static str, &'static str> = {
        let pairs = [
            ("vc", "você"),
            ("qto", "quanto"),
            ("eh", "é"),
            ("tb", "também"),
            ("pra", "para"),
            ("so", "só"),
            ("kk", "risada"),
        ];
        pairs.into_iter().collect()
    };

    // Only these exact strings are spelled out; this is not a general
    // number-to-words converter.
    static ref NUMBER_WORDS: HashMap<&'static str, &'static str> = {
        let pairs = [
            ("1", "um"),
            ("2", "dois"),
            ("3", "três"),
            ("4", "quatro"),
            ("5", "cinco"),
            ("6", "seis"),
            ("7", "sete"),
            ("8", "oito"),
            ("9", "nove"),
            ("10", "dez"),
            ("11", "onze"),
            ("12", "doze"),
            ("13", "treze"),
            ("14", "catorze"),
            ("15", "quinze"),
            ("18", "dezoito"),
            ("20", "vinte"),
            ("22", "vinte e dois"),
            ("23", "vinte e três"),
            ("25", "vinte e cinco"),
            ("28", "vinte e oito"),
            ("29", "vinte e nove"),
            ("30", "trinta"),
            ("32", "trinta e dois"),
            ("39", "trinta e nove"),
            ("40", "quarenta"),
            ("47", "quarenta e sete"),
            ("72", "setenta e dois"),
            ("500", "quinhentos"),
            ("1500", "mil e quinhentos"),
            ("33236333", "trinta e três vinte e três sessenta e três trinta e três"),
            ("26236", "vinte e seis duzentos e trinta e seis"),
        ];
        pairs.into_iter().collect()
    };
}

/// Canonical word for a chat abbreviation, matched case-insensitively.
pub fn chat_word(token: &str) -> Option<&'static str> {
    CHAT_WORDS.get(token.to_lowercase().as_str()).copied()
}

/// Spelled-out form of an enumerated numeral, exact match only.
pub fn number_word(token: &str) -> Option<&'static str> {
    NUMBER_WORDS.get(token).copied()
}

/// Stage 8: replace chat abbreviations; other tokens keep their case.
pub fn expand_chat_speak(text: &str) -> String {
    tokens(text)
        .map(|word| chat_word(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stage 9: spell out enumerated numerals; other tokens pass through.
pub fn spell_out_numerals(text: &str) -> String {
    tokens(text)
        .map(|word| number_word(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
