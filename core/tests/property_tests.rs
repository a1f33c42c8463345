use boolsearch_core::set_ops::{difference, intersect, union};
use boolsearch_core::BooleanIndex;
use proptest::collection::{btree_set, vec as prop_vec};
use proptest::prelude::*;
use std::collections::BTreeSet;

const VOCAB: &[&str] = &["alpha", "beta", "gamma", "delta", "eps"];
const NOISE: &[&str] = &["and", "OR", "not", "missing", ""];

fn query_token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(VOCAB).prop_map(str::to_owned),
        1 => prop::sample::select(NOISE).prop_map(str::to_owned),
    ]
}

fn documents() -> impl Strategy<Value = Vec<(u32, Vec<&'static str>)>> {
    prop_vec((0u32..50, prop_vec(prop::sample::select(VOCAB), 0..4)), 0..20)
}

fn build(docs: &[(u32, Vec<&'static str>)]) -> BooleanIndex {
    let mut idx = BooleanIndex::new();
    for (id, terms) in docs {
        idx.add_document(*id, terms);
    }
    idx
}

fn is_strictly_ascending(v: &[u32]) -> bool {
    v.windows(2).all(|w| w[0] < w[1])
}

// Property: merges agree with ordered-set semantics
proptest! {
    #[test]
    fn prop_set_ops_match_btreeset(
        a in btree_set(0u32..100, 0..30),
        b in btree_set(0u32..100, 0..30)
    ) {
        let av: Vec<u32> = a.iter().copied().collect();
        let bv: Vec<u32> = b.iter().copied().collect();
        prop_assert_eq!(intersect(&av, &bv), a.intersection(&b).copied().collect::<Vec<_>>());
        prop_assert_eq!(union(&av, &bv), a.union(&b).copied().collect::<Vec<_>>());
        prop_assert_eq!(difference(&av, &bv), a.difference(&b).copied().collect::<Vec<_>>());
    }
}

// Property: every search result is strictly ascending
proptest! {
    #[test]
    fn prop_search_results_sorted_unique(
        docs in documents(),
        query in prop_vec(query_token(), 0..8)
    ) {
        let idx = build(&docs);
        let hits = idx.search(&query);
        prop_assert!(is_strictly_ascending(&hits));
        let universe: BTreeSet<u32> = docs.iter().map(|(id, _)| *id).collect();
        prop_assert!(hits.iter().all(|d| universe.contains(d)));
    }
}

// Property: an added term finds its document, a removed one does not
proptest! {
    #[test]
    fn prop_add_then_remove(
        docs in documents(),
        id in 0u32..50,
        term in prop::sample::select(VOCAB)
    ) {
        let mut idx = build(&docs);
        idx.add_document(id, &[term]);
        prop_assert!(idx.search(&[term]).contains(&id));

        let terms = idx.document_terms(id);
        idx.remove_document(id, &terms);
        prop_assert!(!idx.search(&[term]).contains(&id));
        prop_assert!(idx.document_terms(id).is_empty());
    }
}

// Property: no term survives without postings
proptest! {
    #[test]
    fn prop_no_empty_entries(docs in documents()) {
        let mut idx = build(&docs);
        for (id, terms) in &docs {
            idx.remove_document(*id, terms);
        }
        let data = idx.index_data();
        prop_assert!(data.terms.values().all(|posted| !posted.is_empty()));
        prop_assert_eq!(data.term_count, data.terms.len());
    }
}

// Property: leading NOT is the complement within the universe
proptest! {
    #[test]
    fn prop_leading_not_is_complement(
        docs in documents(),
        term in prop::sample::select(VOCAB)
    ) {
        let idx = build(&docs);
        let universe = idx.index_data().documents;
        prop_assert_eq!(idx.search(&["not", term]), difference(&universe, &idx.docs_for(term)));
    }
}
