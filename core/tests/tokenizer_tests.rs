use boolsearch_core::text::{process_document, process_query};
use boolsearch_core::tokenizer::{tokenize, Stopwords, Tokens};

#[test]
fn it_filters_stopwords_and_stems() {
    let p = process_document("The cat sat on the cat's mat");
    assert!(!p.terms.contains(&"the".to_string()));
    assert!(!p.terms.contains(&"on".to_string()));
    // The apostrophe keeps "cat's" in one token; the stemmer then drops the "s".
    assert_eq!(p.terms, vec!["cat", "sat", "cat'", "mat"]);
    assert_eq!(p.stats.token_count, 4);
}

#[test]
fn it_keeps_operator_words_in_queries() {
    let words = tokenize("cats and not dogs", Stopwords::Query);
    assert!(words.contains(&"and".to_string()));
    assert!(words.contains(&"not".to_string()));

    let p = process_query("Cats AND NOT Dogs");
    assert_eq!(p.terms, vec!["cat", "and", "not", "dog"]);
}

#[test]
fn it_normalizes_russian_text() {
    let p = process_document("Тестовый поиск робот система");
    assert_eq!(p.terms, vec!["тестов", "поиск", "робот", "систем"]);

    let p = process_query("поиск и данных");
    assert_eq!(p.terms, vec!["поиск", "данн"]);
}

#[test]
fn it_drops_single_byte_words() {
    let words = tokenize("a b c x-ray", Stopwords::Document);
    assert_eq!(words, vec!["x-ray"]);
}

#[test]
fn tokens_are_lazy() {
    let mut tokens = Tokens::new("alpha beta gamma", Stopwords::Document);
    assert_eq!(tokens.next().as_deref(), Some("alpha"));
    assert_eq!(tokens.next().as_deref(), Some("beta"));
}
