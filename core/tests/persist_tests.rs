use tempfile::tempdir;
use watson_core::persist::{self, IndexPaths, MetaFile, FORMAT_VERSION};
use watson_core::{Analyzer, DocStore, PositionalIndex};

#[test]
fn index_round_trips_through_disk() {
    let analyzer = Analyzer::new();
    let mut store = DocStore::new();
    let mut index = PositionalIndex::new();
    for (title, categories, body) in [
        ("Washington Post", "newspapers", "The Washington Post is an American newspaper."),
        ("Boston", "cities", "Boston is the capital of Massachusetts."),
    ] {
        let id = store.add(title, categories, body);
        index.add_document(&analyzer, store.get(id).unwrap());
    }

    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path());
    persist::save_index(&paths, &index).unwrap();
    persist::save_docs(&paths, &store).unwrap();
    persist::save_meta(
        &paths,
        &MetaFile {
            num_docs: index.total_documents(),
            created_at: "2026-01-01T00:00:00Z".into(),
            version: FORMAT_VERSION,
        },
    )
    .unwrap();

    let (loaded_index, loaded_store, meta) = persist::load_all(&paths).unwrap();
    assert_eq!(loaded_index, index);
    assert_eq!(loaded_store, store);
    assert_eq!(meta.num_docs, 2);
    assert_eq!(meta.version, FORMAT_VERSION);
}

#[test]
fn loading_a_missing_index_fails() {
    let dir = tempdir().unwrap();
    let paths = IndexPaths::new(dir.path().join("nope"));
    assert!(persist::load_index(&paths).is_err());
    assert!(persist::load_meta(&paths).is_err());
}
