use watson_core::{Analyzer, DocStore, Field, PositionalIndex};

const CORPUS: &[(&str, &str, &str)] = &[
    (
        "Washington Post",
        "newspapers",
        "The Washington Post is an American newspaper.",
    ),
    (
        "New York Times",
        "newspapers media",
        "The New York Times is a daily newspaper based in New York City.",
    ),
    (
        "Boston",
        "cities",
        "Boston is the capital of Massachusetts and home to many newspapers.",
    ),
];

fn build() -> (PositionalIndex, DocStore) {
    let analyzer = Analyzer::new();
    let mut store = DocStore::new();
    let mut index = PositionalIndex::new();
    for (title, categories, body) in CORPUS {
        let id = store.add(*title, *categories, *body);
        index.add_document(&analyzer, store.get(id).unwrap());
    }
    (index, store)
}

#[test]
fn rebuild_is_identical() {
    let (first, docs_first) = build();
    let (second, docs_second) = build();
    assert_eq!(first, second);
    assert_eq!(docs_first, docs_second);
}

#[test]
fn document_frequency_matches_postings() {
    let (index, _) = build();
    for term in ["newspap", "washington", "york", "boston"] {
        for field in Field::ALL {
            assert_eq!(
                index.document_frequency(field, term) as usize,
                index.postings(field, term).len(),
                "df/postings mismatch for {term} in {}",
                field.as_str()
            );
        }
    }
}

#[test]
fn postings_are_in_ascending_doc_order() {
    let (index, _) = build();
    let postings = index.postings(Field::Body, "newspap");
    assert_eq!(postings.len(), 3);
    let ids: Vec<_> = postings.iter().map(|p| p.doc_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn unknown_lookups_are_empty_not_errors() {
    let (index, _) = build();
    assert!(index.postings(Field::Body, "zanzibar").is_empty());
    assert_eq!(index.document_frequency(Field::Title, "zanzibar"), 0);
    assert_eq!(index.field_length(Field::Body, 999), 0);
}

#[test]
fn category_terms_only_index_the_categories_field() {
    let (index, _) = build();
    assert_eq!(index.document_frequency(Field::Categories, "citi"), 1);
    assert_eq!(index.document_frequency(Field::Categories, "newspap"), 2);
    assert_eq!(index.document_frequency(Field::Categories, "washington"), 0);
}
