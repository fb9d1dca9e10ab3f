use crate::analyzer::Analyzer;
use crate::store::{DocId, Document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The three indexed document fields. Each field has its own independent
/// positional index; a term occurring in two fields produces two disjoint
/// postings entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Categories,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Categories, Field::Body];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Categories => "categories",
            Field::Body => "body",
        }
    }
}

/// One term's occurrence record for one document/field: frequency plus the
/// ascending zero-based positions of the term in the field's analyzed token
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub tf: u32,
    pub positions: Vec<u32>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct FieldIndex {
    /// term -> postings in ascending doc_id order (documents are ingested
    /// sequentially, so insertion order is doc_id order).
    postings: HashMap<String, Vec<Posting>>,
    /// Token count per document, indexed by doc_id.
    doc_lens: Vec<u32>,
    total_len: u64,
}

impl FieldIndex {
    fn add(&mut self, doc_id: DocId, terms: &[String]) {
        self.doc_lens.push(terms.len() as u32);
        self.total_len += terms.len() as u64;
        for (pos, term) in terms.iter().enumerate() {
            let list = self.postings.entry(term.clone()).or_default();
            match list.last_mut() {
                Some(p) if p.doc_id == doc_id => {
                    p.tf += 1;
                    p.positions.push(pos as u32);
                }
                _ => list.push(Posting { doc_id, tf: 1, positions: vec![pos as u32] }),
            }
        }
    }

    fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    fn doc_len(&self, doc_id: DocId) -> u32 {
        self.doc_lens.get(doc_id as usize).copied().unwrap_or(0)
    }
}

/// Per-field positional inverted index plus the global statistics the BM25
/// ranker needs. Built in a single sequential pass over the corpus and
/// read-only afterwards.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionalIndex {
    title: FieldIndex,
    categories: FieldIndex,
    body: FieldIndex,
    num_docs: u32,
}

impl PositionalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn field(&self, field: Field) -> &FieldIndex {
        match field {
            Field::Title => &self.title,
            Field::Categories => &self.categories,
            Field::Body => &self.body,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldIndex {
        match field {
            Field::Title => &mut self.title,
            Field::Categories => &mut self.categories,
            Field::Body => &mut self.body,
        }
    }

    /// Ingest one document: analyze every field and record a posting with
    /// in-field positions for each term occurrence. Empty fields simply
    /// contribute zero postings. Documents must arrive in doc_id order.
    pub fn add_document(&mut self, analyzer: &Analyzer, doc: &Document) {
        debug_assert_eq!(doc.id, self.num_docs, "documents must be ingested sequentially");
        for field in Field::ALL {
            let text = match field {
                Field::Title => &doc.title,
                Field::Categories => &doc.categories,
                Field::Body => &doc.body,
            };
            let terms = analyzer.analyze(text);
            self.field_mut(field).add(doc.id, &terms);
        }
        self.num_docs += 1;
    }

    /// Postings for a term in a field, ascending by doc_id. Unknown terms
    /// yield an empty slice, not an error.
    pub fn postings(&self, field: Field, term: &str) -> &[Posting] {
        self.field(field).postings(term)
    }

    /// Number of distinct documents containing `term` in `field`.
    pub fn document_frequency(&self, field: Field, term: &str) -> u32 {
        self.field(field).postings(term).len() as u32
    }

    pub fn total_documents(&self) -> u32 {
        self.num_docs
    }

    /// Mean analyzed token count of `field` across all indexed documents,
    /// or 0.0 for an empty index.
    pub fn average_field_length(&self, field: Field) -> f32 {
        if self.num_docs == 0 {
            return 0.0;
        }
        self.field(field).total_len as f32 / self.num_docs as f32
    }

    /// Token count of `field` in one document; 0 for unknown documents.
    pub fn field_length(&self, field: Field, doc_id: DocId) -> u32 {
        self.field(field).doc_len(doc_id)
    }
}
