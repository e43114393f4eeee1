use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref TAGS: Regex = Regex::new(r"<[^>]+>").expect("valid regex");
    static ref URLS_AND_MENTIONS: Regex = Regex::new(r"https?://\S+|@\S+").expect("valid regex");
    static ref PUNCT_AND_DIGITS: Regex = Regex::new(r"[^\w\s]|\d+").expect("valid regex");
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Decompose accented characters (NFKD) and keep only the ASCII base
/// characters; combining marks and anything non-ASCII are dropped.
fn strip_accents(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Clean raw text into its indexable form: HTML-like tags, URLs and
/// @-mentions replaced by spaces, lowercased, accents stripped, punctuation
/// and digits removed, whitespace collapsed and trimmed.
///
/// The pass order matters and is applied identically to every document;
/// the output alphabet is lowercase ASCII letters, underscores, and single
/// spaces. Idempotent.
pub fn clean_text(raw: &str) -> String {
    let text = TAGS.replace_all(raw, " ");
    let text = URLS_AND_MENTIONS.replace_all(&text, " ");
    let text = text.to_lowercase();
    let text = strip_accents(&text);
    let text = PUNCT_AND_DIGITS.replace_all(&text, " ");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
