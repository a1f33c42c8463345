use lazy_static::lazy_static;
use std::collections::HashSet;

const ENGLISH_BASE: &[&str] = &[
    "a", "an", "are", "as", "at", "be", "but", "by", "for", "if", "in",
    "into", "is", "it", "no", "of", "on", "such", "that", "the",
    "their", "then", "there", "these", "they", "this", "to", "was", "will", "with",
];

/// Stripped from indexed text only; queries need them as operators.
const BOOLEAN_KEYWORDS: &[&str] = &["and", "or", "not"];

const RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то",
    "все", "она", "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за",
    "бы", "по", "только", "ее", "мне", "было", "вот", "от", "меня", "еще",
    "нет", "о", "из", "ему", "теперь", "когда", "даже", "ну", "вдруг", "ли",
    "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "нибудь",
    "опять", "уж", "вам", "сказал", "ведь", "там", "потом", "себя", "ничего",
];

lazy_static! {
    static ref DOCUMENT_STOPWORDS: HashSet<&'static str> = ENGLISH_BASE
        .iter()
        .chain(BOOLEAN_KEYWORDS)
        .chain(RUSSIAN)
        .copied()
        .collect();
    static ref QUERY_STOPWORDS: HashSet<&'static str> =
        ENGLISH_BASE.iter().chain(RUSSIAN).copied().collect();
}

/// Which stopword list filters the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopwords {
    /// English and Russian stopwords plus the boolean keywords.
    Document,
    /// English and Russian stopwords; `and`, `or` and `not` pass through.
    Query,
}

impl Stopwords {
    fn set(self) -> &'static HashSet<&'static str> {
        match self {
            Stopwords::Document => &DOCUMENT_STOPWORDS,
            Stopwords::Query => &QUERY_STOPWORDS,
        }
    }

    pub fn contains(self, token: &str) -> bool {
        self.set().contains(token)
    }
}

/// Byte length of the word character starting at `i`, or `None` if the byte
/// there ends a word. Only ASCII letters, `'`, `-` and two-byte basic Cyrillic
/// letters (including Ё/ё) are word characters.
fn word_char_len(bytes: &[u8], i: usize) -> Option<usize> {
    let b = bytes[i];
    if b.is_ascii_alphabetic() || b == b'\'' || b == b'-' {
        return Some(1);
    }
    let next = *bytes.get(i + 1)?;
    let cyrillic = match b {
        0xD0 => matches!(next, 0x90..=0xBF | 0x81),
        0xD1 => matches!(next, 0x80..=0x8F | 0x91),
        _ => false,
    };
    cyrillic.then_some(2)
}

/// Lowercases ASCII and basic Cyrillic capitals in place of a UTF-8 word.
fn lowercase_word(word: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(word.len());
    let mut i = 0;
    while i < word.len() {
        let b = word[i];
        match (b, word.get(i + 1).copied()) {
            // А..П
            (0xD0, Some(c @ 0x90..=0x9F)) => {
                out.extend_from_slice(&[0xD0, c + 0x20]);
                i += 2;
            }
            // Р..Я
            (0xD0, Some(c @ 0xA0..=0xAF)) => {
                out.extend_from_slice(&[0xD1, c - 0x20]);
                i += 2;
            }
            // Ё
            (0xD0, Some(0x81)) => {
                out.extend_from_slice(&[0xD1, 0x91]);
                i += 2;
            }
            (0xD0 | 0xD1, Some(c)) => {
                out.extend_from_slice(&[b, c]);
                i += 2;
            }
            _ => {
                out.push(b.to_ascii_lowercase());
                i += 1;
            }
        }
    }
    out
}

/// Lazy stream of lowercase, stopword-filtered word tokens.
pub struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
    stopwords: Stopwords,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str, stopwords: Stopwords) -> Self {
        Self { bytes: text.as_bytes(), pos: 0, stopwords }
    }

    /// Next maximal run of word characters, regardless of filtering.
    fn next_word(&mut self) -> Option<&'a [u8]> {
        let bytes = self.bytes;
        while self.pos < bytes.len() && word_char_len(bytes, self.pos).is_none() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() {
            match word_char_len(bytes, self.pos) {
                Some(n) => self.pos += n,
                None => break,
            }
        }
        Some(&bytes[start..self.pos])
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(word) = self.next_word() {
            let lower = lowercase_word(word);
            if lower.len() < 2 {
                continue;
            }
            // Words are built from whole ASCII or two-byte Cyrillic characters.
            let token = String::from_utf8_lossy(&lower).into_owned();
            if self.stopwords.contains(&token) {
                continue;
            }
            return Some(token);
        }
        None
    }
}

/// Tokenize text into lowercase words, dropping one-byte words and stopwords.
pub fn tokenize(text: &str, stopwords: Stopwords) -> Vec<String> {
    Tokens::new(text, stopwords).collect()
}
