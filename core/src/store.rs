use serde::{Deserialize, Serialize};

pub type DocId = u32;

/// A parsed corpus document. Owned by the [`DocStore`]; immutable once
/// indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    /// Comma/space-delimited category list, as written in the corpus.
    pub categories: String,
    pub body: String,
}

/// Arena of documents keyed by sequential `DocId`. The positional index's
/// postings point into this store; it is the only component that retains
/// field values after indexing.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocStore {
    docs: Vec<Document>,
}

impl DocStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, assigning the next sequential id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        categories: impl Into<String>,
        body: impl Into<String>,
    ) -> DocId {
        let id = self.docs.len() as DocId;
        self.docs.push(Document {
            id,
            title: title.into(),
            categories: categories.into(),
            body: body.into(),
        });
        id
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id as usize)
    }

    pub fn title(&self, id: DocId) -> Option<&str> {
        self.get(id).map(|d| d.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut store = DocStore::new();
        let a = store.add("A", "", "body a");
        let b = store.add("B", "cats", "body b");
        assert_eq!((a, b), (0, 1));
        assert_eq!(store.title(b), Some("B"));
        assert_eq!(store.get(2), None);
    }
}
