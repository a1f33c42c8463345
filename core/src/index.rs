use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::IndexConfig;
use crate::dictionary::TermDictionary;
use crate::query::{parse_query, Operator};
use crate::registry::DocumentRegistry;
use crate::set_ops::{difference, intersect, union};
use crate::{is_valid_term, DocId};

/// Point-in-time copy of the index contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexData {
    /// Registered documents, ascending.
    pub documents: Vec<DocId>,
    /// Term to posted documents, in posting-list order (newest first).
    pub terms: HashMap<String, Vec<DocId>>,
    pub doc_count: usize,
    pub term_count: usize,
}

/// Inverted index over externally assigned document ids.
///
/// Not synchronized: mutation takes `&mut self`, so hosts that share an index
/// across threads wrap it in a lock.
#[derive(Debug, Clone, Default)]
pub struct BooleanIndex {
    dictionary: TermDictionary,
    registry: DocumentRegistry,
}

impl BooleanIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self { dictionary: TermDictionary::new(&config), registry: DocumentRegistry::new() }
    }

    /// Registers `doc_id` and posts it against every valid term. Repeated
    /// terms and repeated calls are idempotent.
    pub fn add_document<S: AsRef<str>>(&mut self, doc_id: DocId, terms: &[S]) {
        self.registry.insert(doc_id);
        let mut posted = 0usize;
        for term in terms {
            let term = term.as_ref();
            if !is_valid_term(term) {
                continue;
            }
            if self.dictionary.get_or_create(term).postings_mut().insert(doc_id) {
                posted += 1;
            }
        }
        tracing::debug!(doc_id, terms = terms.len(), posted, "added document");
    }

    /// Unregisters `doc_id` and unposts it from the given terms, dropping terms
    /// left without documents.
    ///
    /// An id that is not registered is ignored entirely; postings that still
    /// reference it are left in place.
    pub fn remove_document<S: AsRef<str>>(&mut self, doc_id: DocId, terms: &[S]) {
        if !self.registry.remove(doc_id) {
            tracing::debug!(doc_id, "remove of unregistered document ignored");
            return;
        }
        let mut dropped = 0usize;
        for term in terms {
            let term = term.as_ref();
            if !is_valid_term(term) {
                continue;
            }
            let Some(entry) = self.dictionary.find_mut(term) else {
                continue;
            };
            entry.postings_mut().remove(doc_id);
            if self.dictionary.delete_if_empty(term) {
                dropped += 1;
            }
        }
        tracing::debug!(doc_id, terms = terms.len(), dropped, "removed document");
    }

    /// Ascending documents posted against `term`; empty if the term is unknown.
    pub fn docs_for(&self, term: &str) -> Vec<DocId> {
        self.dictionary
            .find(term)
            .map(|entry| entry.postings().materialize_sorted())
            .unwrap_or_default()
    }

    /// Evaluates a flat boolean query left to right.
    ///
    /// Terms are looked up exactly as given, so they must already be
    /// normalized the same way the indexed terms were (see
    /// [`crate::text::process_query`]).
    pub fn search<S: AsRef<str>>(&self, query_terms: &[S]) -> Vec<DocId> {
        let clauses = parse_query(query_terms);
        let Some((first, rest)) = clauses.split_first() else {
            return Vec::new();
        };

        let mut result = match first.op {
            Operator::Not => difference(&self.registry.to_sorted_vec(), &self.docs_for(&first.term)),
            Operator::And | Operator::Or => self.docs_for(&first.term),
        };
        tracing::trace!(op = %first.op, term = %first.term, hits = result.len(), "seeded query");

        for clause in rest {
            let docs = self.docs_for(&clause.term);
            result = match clause.op {
                Operator::And => intersect(&result, &docs),
                Operator::Or => union(&result, &docs),
                Operator::Not => difference(&result, &docs),
            };
            tracing::trace!(op = %clause.op, term = %clause.term, hits = result.len(), "applied clause");
        }

        tracing::debug!(clauses = clauses.len(), hits = result.len(), "search complete");
        result
    }

    pub fn document_count(&self) -> usize {
        self.registry.len()
    }

    pub fn term_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn contains_document(&self, doc_id: DocId) -> bool {
        self.registry.contains(doc_id)
    }

    pub fn index_data(&self) -> IndexData {
        let terms = self
            .dictionary
            .iter()
            .map(|entry| (entry.term().to_owned(), entry.postings().iter().collect()))
            .collect();
        IndexData {
            documents: self.registry.to_sorted_vec(),
            terms,
            doc_count: self.document_count(),
            term_count: self.term_count(),
        }
    }

    /// Terms currently posted against `doc_id`, in dictionary iteration order.
    pub fn document_terms(&self, doc_id: DocId) -> Vec<String> {
        self.dictionary
            .iter()
            .filter(|entry| entry.postings().contains(doc_id))
            .map(|entry| entry.term().to_owned())
            .collect()
    }

    pub fn clear(&mut self) {
        self.dictionary.clear();
        self.registry.clear();
        tracing::debug!("index cleared");
    }
}
