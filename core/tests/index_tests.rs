use boolsearch_core::set_ops::{intersect, union};
use boolsearch_core::{process_document, process_query, BooleanIndex, IndexConfig};

fn pets() -> BooleanIndex {
    let mut idx = BooleanIndex::new();
    idx.add_document(1, &["cat", "dog"]);
    idx.add_document(2, &["cat", "bird"]);
    idx
}

#[test]
fn pets_scenario() {
    let mut idx = pets();
    assert_eq!(idx.search(&["cat"]), vec![1, 2]);
    assert_eq!(idx.search(&["cat", "and", "dog"]), vec![1]);
    assert_eq!(idx.search(&["cat", "not", "dog"]), vec![2]);
    assert_eq!(idx.search(&["dog", "or", "bird"]), vec![1, 2]);

    idx.remove_document(1, &["cat", "dog"]);
    assert_eq!(idx.search(&["cat"]), vec![2]);
}

#[test]
fn repeated_add_does_not_duplicate() {
    let mut idx = BooleanIndex::new();
    idx.add_document(4, &["t"]);
    idx.add_document(4, &["t", "t"]);
    assert_eq!(idx.search(&["t"]), vec![4]);
    assert_eq!(idx.index_data().terms["t"], vec![4]);
    assert_eq!(idx.document_count(), 1);
}

#[test]
fn fold_is_strictly_left_to_right() {
    let mut idx = BooleanIndex::new();
    idx.add_document(1, &["a"]);
    idx.add_document(2, &["b"]);
    idx.add_document(3, &["b", "c"]);
    idx.add_document(4, &["a", "c"]);

    let expected = intersect(&union(&idx.docs_for("a"), &idx.docs_for("b")), &idx.docs_for("c"));
    assert_eq!(idx.search(&["a", "or", "b", "and", "c"]), expected);
    assert_eq!(expected, vec![3, 4]);
    // Precedence-based evaluation would have produced [1, 3, 4].
}

#[test]
fn leading_not_subtracts_from_universe() {
    let mut idx = pets();
    idx.add_document(3, &[] as &[&str]);
    assert_eq!(idx.search(&["not", "cat"]), vec![3]);
    assert_eq!(idx.search(&["not", "cat", "or", "dog"]), vec![1, 3]);
}

#[test]
fn clear_resets_everything() {
    let mut idx = pets();
    idx.clear();
    assert_eq!(idx.document_count(), 0);
    assert_eq!(idx.term_count(), 0);
    assert!(idx.search(&["cat"]).is_empty());
    assert!(idx.search(&["not", "cat"]).is_empty());
    assert_eq!(idx.index_data().documents, Vec::<u32>::new());
}

#[test]
fn remove_of_unregistered_document_leaves_postings() {
    let mut idx = pets();
    idx.remove_document(1, &["cat", "dog"]);
    // Already unregistered: the call is ignored even though nothing is left to do.
    idx.remove_document(1, &["cat"]);
    assert_eq!(idx.search(&["cat"]), vec![2]);

    // Id 9 was never added, so "cat" postings for 2 are untouched.
    idx.remove_document(9, &["cat"]);
    assert_eq!(idx.search(&["cat"]), vec![2]);
}

#[test]
fn remove_with_partial_terms_keeps_the_rest() {
    let mut idx = pets();
    idx.remove_document(1, &["dog"]);
    assert!(!idx.contains_document(1));
    // "cat" was not listed, so its stale posting for 1 survives removal.
    assert_eq!(idx.search(&["cat"]), vec![1, 2]);
    assert_eq!(idx.document_terms(1), vec!["cat".to_string()]);
}

#[test]
fn document_terms_lists_every_posting() {
    let idx = pets();
    let mut terms = idx.document_terms(2);
    terms.sort();
    assert_eq!(terms, vec!["bird", "cat"]);
    assert!(idx.document_terms(77).is_empty());
}

#[test]
fn counts_match_snapshot() {
    let mut idx = BooleanIndex::with_config(IndexConfig::with_bucket_count(3));
    idx.add_document(1, &["a1", "b2", "c3", "d4"]);
    idx.add_document(2, &["a1"]);
    let data = idx.index_data();
    assert_eq!(data.term_count, 4);
    assert_eq!(data.terms.len(), 4);
    assert_eq!(data.doc_count, 2);
    assert_eq!(data.terms["a1"], vec![2, 1]);
}

#[test]
fn end_to_end_with_text_pipeline() {
    let docs = [
        (1, "Тестовый поиск робот система"),
        (2, "Поиск данные система информация"),
        (3, "Тест обработка текст анализ"),
        (4, "Алгоритм код программирование система"),
        (5, "Поиск информация данные тест"),
    ];
    let mut idx = BooleanIndex::new();
    for (id, text) in docs {
        idx.add_document(id, &process_document(text).terms);
    }

    let search = |q: &str| idx.search(&process_query(q).terms);
    assert_eq!(search("поиск"), vec![1, 2, 5]);
    assert_eq!(search("система"), vec![1, 2, 4]);
    assert_eq!(search("поиск система"), vec![1, 2]);
    assert_eq!(search("поиск and система"), vec![1, 2]);
    assert_eq!(search("тест or данные"), vec![2, 3, 5]);
    assert_eq!(search("система not данные"), vec![1, 4]);
    assert_eq!(search("поиск and система not информация"), vec![1]);
}
