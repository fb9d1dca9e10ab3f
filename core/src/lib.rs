//! Core of the watson question-answering search engine: a per-field
//! positional inverted index over (title, categories, body) documents,
//! BM25 ranking, disjunctive multi-clause queries with quoted-phrase
//! boosting, and a rank-position evaluation harness.
//!
//! The index and document store are built once per corpus and read-only
//! afterwards; every component is an explicit value passed by reference,
//! never a process-wide singleton.

pub mod analyzer;
pub mod eval;
pub mod index;
pub mod persist;
pub mod query;
pub mod rank;
pub mod search;
pub mod store;

pub use analyzer::{Analyzer, AnalyzerConfig};
pub use eval::{Evaluator, RankStats};
pub use index::{Field, PositionalIndex, Posting};
pub use query::{Clause, Query, QueryBuilder, PHRASE_BOOST};
pub use rank::Bm25;
pub use search::{ScoredResult, Searcher};
pub use store::{DocId, DocStore, Document};
