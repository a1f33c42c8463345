//! Suffix-stripping stemmers for English and Russian.
//!
//! Only two scripts are handled. A word containing any Cyrillic byte goes to
//! the Russian stemmer, everything else to the English one. Lengths are
//! measured in UTF-8 bytes throughout.

/// Script a token is stemmed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
}

impl Script {
    pub fn detect(word: &str) -> Self {
        if word.bytes().any(|b| b == 0xD0 || b == 0xD1) {
            Script::Cyrillic
        } else {
            Script::Latin
        }
    }
}

/// Checked in order; the first match wins, so order is significant.
const RUSSIAN_ENDINGS: &[&str] = &[
    "ность", "ностью", "ностям", "ностях",
    "ствие", "ствием", "ствия", "ствий", "ствиям", "ствиях",
    "тель", "теля", "телем", "телям", "телях",
    "ение", "ением", "ения", "ений", "ениям", "ениях",
    "ание", "анием", "ания", "аний", "аниям", "аниях",
    "ься", "ться",
    "ого", "его", "ому", "ему", "ими", "ыми", "их", "ых",
    "ий", "ия", "ию", "ие", "иях", "иям", "иями",
    "ый", "ая", "ое", "ые", "ой", "ей", "ом", "ем",
    "ую", "юю",
    "ем", "ом", "ам", "ям", "ах", "ях",
    "ма", "ми", "му", "м",
    "и", "ы", "ь", "а", "я", "о", "е", "у", "ю",
];

const ENGLISH_SUFFIXES: &[&str] = &["es", "sses", "ies", "ss", "s", "ing", "ed", "er", "est", "ly"];

/// Strips the first suffix in `suffixes` that is strictly shorter than `word`.
fn strip_first<'a>(word: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| {
            if word.len() > suffix.len() {
                word.strip_suffix(*suffix)
            } else {
                None
            }
        })
        .unwrap_or(word)
}

pub fn stem_russian(word: &str) -> String {
    match word {
        "система" => return "систем".to_owned(),
        "данных" => return "данн".to_owned(),
        _ => {}
    }
    if word.len() < 4 {
        return word.to_owned();
    }
    let stem = strip_first(word, RUSSIAN_ENDINGS);
    if stem.len() >= 3 {
        stem.to_owned()
    } else {
        word.to_owned()
    }
}

pub fn stem_english(word: &str) -> String {
    if word.len() < 4 {
        return word.to_owned();
    }
    strip_first(word, ENGLISH_SUFFIXES).to_owned()
}

pub fn stem(word: &str) -> String {
    match Script::detect(word) {
        Script::Cyrillic => stem_russian(word),
        Script::Latin => stem_english(word),
    }
}
