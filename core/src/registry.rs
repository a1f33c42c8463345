use std::collections::BTreeSet;

use crate::DocId;

/// Every currently indexed document; the universe a leading NOT subtracts from.
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    docs: BTreeSet<DocId>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc_id: DocId) -> bool {
        self.docs.insert(doc_id)
    }

    /// Returns whether `doc_id` was registered.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        self.docs.remove(&doc_id)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.docs.contains(&doc_id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn to_sorted_vec(&self) -> Vec<DocId> {
        self.docs.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.docs.clear();
    }
}
