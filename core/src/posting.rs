use crate::DocId;

/// Set of documents posted against one term.
///
/// Kept in insertion order with the newest document first; callers that need
/// an ordered view go through [`PostingList::materialize_sorted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    // Oldest first; iteration reverses it.
    docs: Vec<DocId>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `doc_id` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, doc_id: DocId) -> bool {
        if self.contains(doc_id) {
            return false;
        }
        self.docs.push(doc_id);
        true
    }

    /// Removes one occurrence of `doc_id`. Returns whether it was present.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        match self.docs.iter().position(|&d| d == doc_id) {
            Some(pos) => {
                self.docs.remove(pos);
                true
            }
            None => false,
        }
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

    /// Documents in internal order, most recently inserted first.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.docs.iter().rev().copied()
    }

    /// Ascending copy of the documents, computed fresh on every call.
    pub fn materialize_sorted(&self) -> Vec<DocId> {
        let mut sorted = self.docs.clone();
        sorted.sort_unstable();
        sorted
    }
}
