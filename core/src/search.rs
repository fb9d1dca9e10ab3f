use crate::index::{Field, PositionalIndex, Posting};
use crate::query::{Clause, Query, QueryBuilder};
use crate::rank::Bm25;
use crate::store::{DocId, DocStore};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A ranked hit. Within one search, results are ordered by score descending
/// with ties broken by first-seen candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub doc_id: DocId,
    pub score: f32,
}

/// Evaluates disjunctive queries against a read-only index and document
/// store. Candidates are the union of documents matched by any clause; each
/// candidate's score is the sum of its matched clauses' BM25 contributions.
pub struct Searcher<'a> {
    index: &'a PositionalIndex,
    store: &'a DocStore,
    bm25: Bm25,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a PositionalIndex, store: &'a DocStore) -> Self {
        Self::with_similarity(index, store, Bm25::default())
    }

    pub fn with_similarity(index: &'a PositionalIndex, store: &'a DocStore, bm25: Bm25) -> Self {
        Self { index, store, bm25 }
    }

    /// Rank at most `top_k` documents for `query`. A query matching nothing
    /// (or an empty query, or `top_k == 0`) yields an empty result set.
    pub fn execute(&self, query: &Query, top_k: usize) -> Vec<ScoredResult> {
        if top_k == 0 {
            return Vec::new();
        }

        // first-seen order doubles as the tie-break order
        let mut order: Vec<DocId> = Vec::new();
        let mut scores: HashMap<DocId, f32> = HashMap::new();
        let mut accumulate = |doc_id: DocId, contribution: f32| {
            if contribution <= 0.0 {
                return;
            }
            scores
                .entry(doc_id)
                .and_modify(|s| *s += contribution)
                .or_insert_with(|| {
                    order.push(doc_id);
                    contribution
                });
        };

        for clause in &query.clauses {
            match clause {
                Clause::Term { field, term } => {
                    self.score_term(*field, term, &mut accumulate);
                }
                Clause::FieldMatch { field, terms } => {
                    for term in terms {
                        self.score_term(*field, term, &mut accumulate);
                    }
                }
                Clause::Phrase { field, terms, boost } => {
                    let occurrences = phrase_occurrences(self.index, *field, terms);
                    let df = occurrences.len() as u32;
                    for (doc_id, tf) in occurrences {
                        let s = self.bm25.score(
                            tf,
                            df,
                            self.index.total_documents(),
                            self.index.field_length(*field, doc_id),
                            self.index.average_field_length(*field),
                        );
                        accumulate(doc_id, *boost * s);
                    }
                }
            }
        }
        drop(accumulate);

        let mut results: Vec<ScoredResult> = order
            .into_iter()
            .map(|doc_id| ScoredResult { doc_id, score: scores[&doc_id] })
            .collect();
        // sort_by is stable, so equal scores keep first-seen order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(top_k);
        results
    }

    fn score_term(&self, field: Field, term: &str, accumulate: &mut impl FnMut(DocId, f32)) {
        for posting in self.index.postings(field, term) {
            let s = self.bm25.score_term(self.index, field, term, posting.doc_id, posting.tf);
            accumulate(posting.doc_id, s);
        }
    }

    /// The composed search surface: build the query for a (clue, category)
    /// pair, rank, and resolve titles through the document store.
    pub fn search(
        &self,
        builder: &QueryBuilder,
        clue: &str,
        category: &str,
        top_k: usize,
    ) -> Vec<(String, f32)> {
        let query = builder.build(clue, category);
        self.execute(&query, top_k)
            .into_iter()
            .filter_map(|r| self.store.title(r.doc_id).map(|t| (t.to_string(), r.score)))
            .collect()
    }
}

/// Documents containing `terms` at consecutive positions in `field`, with
/// the number of occurrences per document. Relies on postings being in
/// ascending doc_id order and positions ascending within a posting.
fn phrase_occurrences(
    index: &PositionalIndex,
    field: Field,
    terms: &[String],
) -> Vec<(DocId, u32)> {
    let Some(first) = terms.first() else {
        return Vec::new();
    };
    let lists: Vec<&[Posting]> = terms.iter().map(|t| index.postings(field, t)).collect();
    if lists.iter().any(|l| l.is_empty()) {
        return Vec::new();
    }
    if terms.len() == 1 {
        return index
            .postings(field, first)
            .iter()
            .map(|p| (p.doc_id, p.tf))
            .collect();
    }

    let mut out = Vec::new();
    'docs: for anchor in lists[0] {
        let mut rest: Vec<&Posting> = Vec::with_capacity(lists.len() - 1);
        for list in &lists[1..] {
            match list.binary_search_by_key(&anchor.doc_id, |p| p.doc_id) {
                Ok(i) => rest.push(&list[i]),
                Err(_) => continue 'docs,
            }
        }
        let mut count = 0u32;
        'starts: for &start in &anchor.positions {
            for (offset, posting) in rest.iter().enumerate() {
                let want = start + offset as u32 + 1;
                if posting.positions.binary_search(&want).is_err() {
                    continue 'starts;
                }
            }
            count += 1;
        }
        if count > 0 {
            out.push((anchor.doc_id, count));
        }
    }
    out
}
