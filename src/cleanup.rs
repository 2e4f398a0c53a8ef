//! Regex-driven cleanup stages: markup, links, emoji, punctuation,
//! special characters and whitespace.

use regex::Regex;
use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

// Pre-compile all cleanup patterns at module load time
lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<.*?>").unwrap();
    // The dot in `t.co` is a wildcard on purpose; links like `tXco/abc` go too.
    static ref LINK: Regex = Regex::new(r"http\S+|www\S+|t.co/\S+").unwrap();

    // A grapheme is an emoji if it carries a pictographic code point,
    // a regional indicator (flags) or a keycap mark.
    static ref EMOJI_GRAPHEME: Regex =
        Regex::new(r"[\p{Extended_Pictographic}\x{1F1E6}-\x{1F1FF}\x{20E3}]").unwrap();
    static ref EMOJI_PLACEHOLDER: Regex = Regex::new(r":\S+?:").unwrap();

    static ref PUNCTUATION: Regex = Regex::new(r#"[.,?!:;'"()\[\]<>{}|]"#).unwrap();
    static ref SPECIAL_SYMBOLS: Regex = Regex::new(r"[˃α≤]").unwrap();
    static ref NON_ASCII_WORD: Regex = Regex::new(r"[^a-zA-Z0-9\s\x1C-\x1F]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
}

/// Emoji runs that slipped past placeholder conversion in real chat exports.
const EMOJI_LITERALS: [&str; 3] = ["😹😹", "😴😴", "🙌🙌🙌"];

/// Token separator: Unicode white space plus the ASCII information
/// separators `\x1c`..=`\x1f`.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Non-empty tokens between separator runs.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Stage 1: drop every `<...>` tag (tags do not span lines).
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Stage 2: drop `http…`, `www…` and `t.co/…` links up to the next whitespace.
pub fn strip_links(text: &str) -> String {
    LINK.replace_all(text, "").into_owned()
}

/// Replace each emoji grapheme with a `:<code points>:` placeholder token.
pub fn demojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if EMOJI_GRAPHEME.is_match(grapheme) {
            out.push(':');
            let names: Vec<String> = grapheme.chars().map(|c| format!("{:x}", c as u32)).collect();
            out.push_str(&names.join("-"));
            out.push(':');
        } else {
            out.push_str(grapheme);
        }
    }
    out
}

/// Stage 3: convert emoji to placeholders, remove every `:name:` token,
/// then remove the known literal runs.
pub fn strip_emoji(text: &str) -> String {
    let demojized = demojize(text);
    let mut result = EMOJI_PLACEHOLDER.replace_all(&demojized, "").into_owned();
    for literal in EMOJI_LITERALS {
        if result.contains(literal) {
            result = result.replace(literal, "");
        }
    }
    result
}

/// Stage 5: remove `. , ? ! : ; ' " ( ) [ ] < > { } |`.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Stage 6: remove a few stray symbols, then anything that is not an ASCII
/// letter, ASCII digit or whitespace. Accented letters go as well.
pub fn strip_special_chars(text: &str) -> String {
    let without_symbols = SPECIAL_SYMBOLS.replace_all(text, "");
    NON_ASCII_WORD.replace_all(&without_symbols, "").into_owned()
}

/// Stage 7: collapse whitespace runs to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
