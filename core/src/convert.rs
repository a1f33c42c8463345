//! Conversions from host JSON values into engine inputs.
//!
//! Values of the wrong shape are errors; nothing is coerced. Well-shaped but
//! meaningless input (blank terms, unknown ids) is accepted here and ignored
//! by the index.

use serde_json::Value;
use std::io::BufRead;

use crate::error::{Error, Result};
use crate::text::process_document;
use crate::DocId;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An array of strings. Any other item type fails with its position.
pub fn terms_from_value(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| Error::NotAnArray(kind(value)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::NotAString { index, found: kind(other) }),
        })
        .collect()
}

pub fn doc_id_from_value(value: &Value) -> Result<DocId> {
    value
        .as_u64()
        .and_then(|n| DocId::try_from(n).ok())
        .ok_or_else(|| Error::InvalidDocId(value.to_string()))
}

/// A document ready to be added: its id and normalized terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: DocId,
    pub terms: Vec<String>,
}

impl DocumentRecord {
    /// Reads `{"id": .., "terms": [..]}` or `{"id": .., "text": ".."}`.
    ///
    /// `terms` are taken verbatim; `text` is run through
    /// [`process_document`]. When both are present `terms` wins.
    pub fn from_value(value: &Value) -> Result<Self> {
        let id = value.get("id").ok_or(Error::MissingField("id"))?;
        let id = doc_id_from_value(id)?;
        let terms = if let Some(terms) = value.get("terms") {
            terms_from_value(terms)?
        } else if let Some(text) = value.get("text") {
            let text = text
                .as_str()
                .ok_or(Error::FieldNotAString { field: "text", found: kind(text) })?;
            process_document(text).terms
        } else {
            return Err(Error::MissingField("terms"));
        };
        Ok(Self { id, terms })
    }
}

/// A whole JSON document: an array of records or a single record object.
pub fn records_from_value(value: &Value) -> Result<Vec<DocumentRecord>> {
    match value {
        Value::Array(items) => items.iter().map(DocumentRecord::from_value).collect(),
        Value::Object(_) => Ok(vec![DocumentRecord::from_value(value)?]),
        other => Err(Error::NotAnArray(kind(other))),
    }
}

/// One record per non-blank line.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<DocumentRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)?;
        records.push(DocumentRecord::from_value(&value)?);
    }
    Ok(records)
}
