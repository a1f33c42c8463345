//! In-memory boolean search engine.
//!
//! Terms produced by [`text::process_document`] are posted against external
//! document ids in a [`BooleanIndex`]; queries normalized by
//! [`text::process_query`] are evaluated left to right with AND, OR and NOT.

pub mod config;
pub mod convert;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod posting;
pub mod query;
pub mod registry;
pub mod set_ops;
pub mod stemmer;
pub mod text;
pub mod tokenizer;

pub use config::IndexConfig;
pub use error::{Error, Result};
pub use index::{BooleanIndex, IndexData};
pub use query::{Operator, QueryClause};
pub use text::{process_document, process_query, ProcessedText, TextStats};

pub type DocId = u32;

/// Terms and query tokens of this many bytes or more are dropped.
pub const MAX_TERM_LEN: usize = 255;

/// Whether `term` may be stored in or looked up from the dictionary.
pub fn is_valid_term(term: &str) -> bool {
    !term.trim().is_empty() && term.len() < MAX_TERM_LEN
}
