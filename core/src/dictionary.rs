//! Term dictionary: a fixed-size chained hash table keyed by term bytes.
//!
//! Buckets are chosen with 64-bit FNV-1a reduced modulo the bucket count. The
//! table never grows; the bucket count only bounds chain length, it has no
//! effect on lookup results.

use crate::config::IndexConfig;
use crate::posting::PostingList;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

#[derive(Debug, Clone)]
pub struct TermEntry {
    term: String,
    postings: PostingList,
}

impl TermEntry {
    fn new(term: &str) -> Self {
        Self { term: term.to_owned(), postings: PostingList::new() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn postings(&self) -> &PostingList {
        &self.postings
    }

    pub fn postings_mut(&mut self) -> &mut PostingList {
        &mut self.postings
    }
}

#[derive(Debug, Clone)]
pub struct TermDictionary {
    buckets: Vec<Vec<TermEntry>>,
    len: usize,
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::new(&IndexConfig::default())
    }
}

impl TermDictionary {
    pub fn new(config: &IndexConfig) -> Self {
        let bucket_count = config.bucket_count.max(1);
        Self { buckets: vec![Vec::new(); bucket_count], len: 0 }
    }

    fn bucket_of(&self, term: &str) -> usize {
        // The remainder is below the bucket count, which is a usize.
        (fnv1a(term.as_bytes()) % self.buckets.len() as u64) as usize
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Read-only lookup. An unknown term has no entry.
    pub fn find(&self, term: &str) -> Option<&TermEntry> {
        if term.is_empty() {
            return None;
        }
        self.buckets[self.bucket_of(term)].iter().find(|e| e.term == term)
    }

    pub fn find_mut(&mut self, term: &str) -> Option<&mut TermEntry> {
        if term.is_empty() {
            return None;
        }
        let idx = self.bucket_of(term);
        self.buckets[idx].iter_mut().find(|e| e.term == term)
    }

    /// Returns the entry for `term`, appending a new one to the end of its
    /// chain if none exists.
    pub fn get_or_create(&mut self, term: &str) -> &mut TermEntry {
        let idx = self.bucket_of(term);
        let chain = &mut self.buckets[idx];
        let pos = match chain.iter().position(|e| e.term == term) {
            Some(pos) => pos,
            None => {
                chain.push(TermEntry::new(term));
                self.len += 1;
                chain.len() - 1
            }
        };
        &mut chain[pos]
    }

    /// Drops the entry for `term` if its posting list is empty. Returns whether
    /// an entry was removed.
    pub fn delete_if_empty(&mut self, term: &str) -> bool {
        let idx = self.bucket_of(term);
        let chain = &mut self.buckets[idx];
        match chain.iter().position(|e| e.term == term && e.postings.is_empty()) {
            Some(pos) => {
                // Chain order is observable through iteration, so no swap_remove.
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in bucket order, then chain order within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> + '_ {
        self.buckets.iter().flatten()
    }

    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}
