use crate::search::ScoredResult;
use crate::store::DocStore;
use std::collections::HashMap;

/// Checks ranked results against an expected-answer title and reports where
/// the right document landed. The title comparison is pluggable; the
/// default is a case-insensitive exact match.
pub struct Evaluator<'a> {
    store: &'a DocStore,
    matcher: Box<dyn Fn(&str, &str) -> bool + 'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(store: &'a DocStore) -> Self {
        Self::with_matcher(store, |title: &str, expected: &str| {
            title.to_lowercase() == expected.to_lowercase()
        })
    }

    pub fn with_matcher(store: &'a DocStore, matcher: impl Fn(&str, &str) -> bool + 'a) -> Self {
        Self { store, matcher: Box::new(matcher) }
    }

    /// 1-based rank of the first result whose title matches `expected`, or
    /// 0 if none of the results match.
    pub fn rank_of(&self, results: &[ScoredResult], expected: &str) -> usize {
        for (i, result) in results.iter().enumerate() {
            if let Some(title) = self.store.title(result.doc_id) {
                if (self.matcher)(title, expected) {
                    return i + 1;
                }
            }
        }
        0
    }
}

/// Case-insensitive whole-string regex matching, for answer lines written
/// as patterns (e.g. `The (Washington|Wash\.) Post`). Invalid patterns
/// match nothing.
pub fn pattern_matcher() -> impl Fn(&str, &str) -> bool {
    |title: &str, expected: &str| {
        regex::RegexBuilder::new(&format!("^(?:{expected})$"))
            .case_insensitive(true)
            .build()
            .map(|re| re.is_match(title))
            .unwrap_or(false)
    }
}

/// Aggregate of rank positions across a batch of evaluated queries: how
/// many queries found their answer at each position (position 0 = miss).
#[derive(Debug, Default)]
pub struct RankStats {
    hits_at: HashMap<usize, usize>,
    total_queries: usize,
}

impl RankStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one query's outcome; `rank` 0 means the answer never showed
    /// up in the top K.
    pub fn record(&mut self, rank: usize) {
        *self.hits_at.entry(rank).or_insert(0) += 1;
        self.total_queries += 1;
    }

    pub fn count_at(&self, rank: usize) -> usize {
        self.hits_at.get(&rank).copied().unwrap_or(0)
    }

    /// Queries whose answer appeared anywhere in the top `k`.
    pub fn hits_in_top(&self, k: usize) -> usize {
        (1..=k).map(|rank| self.count_at(rank)).sum()
    }

    /// Fraction of queries whose top-ranked result was the answer.
    pub fn precision_at_1(&self) -> f64 {
        if self.total_queries == 0 {
            return 0.0;
        }
        self.count_at(1) as f64 / self.total_queries as f64
    }

    pub fn total_queries(&self) -> usize {
        self.total_queries
    }
}
