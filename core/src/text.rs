//! Text normalization shared by the indexing and query paths.
//!
//! Both entry points tokenize, filter stopwords and stem; they differ only in
//! whether the boolean keywords are treated as stopwords.

use serde::{Deserialize, Serialize};

use crate::stemmer::stem;
use crate::tokenizer::{Stopwords, Tokens};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub token_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedText {
    pub terms: Vec<String>,
    pub stats: TextStats,
}

fn process(text: &str, stopwords: Stopwords) -> ProcessedText {
    let terms: Vec<String> = Tokens::new(text, stopwords).map(|t| stem(&t)).collect();
    let stats = TextStats { token_count: terms.len() };
    ProcessedText { terms, stats }
}

/// Terms to index for a document body.
pub fn process_document(text: &str) -> ProcessedText {
    process(text, Stopwords::Document)
}

/// Terms for a query; `and`, `or` and `not` are kept for the query parser.
pub fn process_query(text: &str) -> ProcessedText {
    process(text, Stopwords::Query)
}
