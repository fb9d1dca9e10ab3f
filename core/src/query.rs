use crate::analyzer::Analyzer;
use crate::index::Field;

/// Boost applied to quoted-span phrase clauses.
pub const PHRASE_BOOST: f32 = 2.5;

/// One sub-condition of a disjunctive query.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// A single term in one field.
    Term { field: Field, term: String },
    /// An exact term sequence in one field, score-scaled by `boost`.
    Phrase { field: Field, terms: Vec<String>, boost: f32 },
    /// Match any of `terms` in one field, contributions summed. Duplicate
    /// terms contribute once per occurrence, like repeated words in a
    /// natural-language query.
    FieldMatch { field: Field, terms: Vec<String> },
}

/// A disjunction of clauses: a document need not match every clause, but
/// every clause it does match adds to its score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Builds the multi-field query for one (clue, category) pair:
///
/// 1. every double-quoted span of the clue becomes a boosted body phrase;
/// 2. the clue plus the category text queries the body field;
/// 3. the category text alone queries the categories field.
///
/// The analyzer tokenizes away anything that could read as operator syntax,
/// so clue text is always treated literally.
pub struct QueryBuilder<'a> {
    analyzer: &'a Analyzer,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Self { analyzer }
    }

    pub fn build(&self, clue: &str, category: &str) -> Query {
        let mut clauses = Vec::new();

        if clue.contains('"') {
            // Splitting on the quote character leaves quoted spans at odd
            // indices. With an unpaired trailing quote the trailing text
            // lands at an odd index too and is kept as a phrase; this
            // mirrors the split semantics deliberately.
            for (i, span) in clue.split('"').enumerate() {
                if i % 2 == 0 {
                    continue;
                }
                let terms = self.analyzer.analyze(span);
                if !terms.is_empty() {
                    clauses.push(Clause::Phrase {
                        field: Field::Body,
                        terms,
                        boost: PHRASE_BOOST,
                    });
                }
            }
        }

        let body_text = format!("{clue}\n{category}");
        clauses.push(Clause::FieldMatch {
            field: Field::Body,
            terms: self.analyzer.analyze(&body_text),
        });
        clauses.push(Clause::FieldMatch {
            field: Field::Categories,
            terms: self.analyzer.analyze(category),
        });

        Query { clauses }
    }
}
