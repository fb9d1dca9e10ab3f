use crate::index::{Field, PositionalIndex};
use crate::store::DocId;

/// BM25 similarity with tunable term-frequency saturation (`k1`) and length
/// normalization (`b`). The defaults are the tuning the system was
/// evaluated with, not the textbook 1.2/0.75.
#[derive(Debug, Clone, Copy)]
pub struct Bm25 {
    pub k1: f32,
    pub b: f32,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self { k1: 1.14, b: 0.15 }
    }
}

impl Bm25 {
    pub fn new(k1: f32, b: f32) -> Self {
        Self { k1, b }
    }

    /// Smoothed inverse document frequency: `ln(1 + (N - df + 0.5) / (df + 0.5))`.
    /// Always finite and non-negative for `df <= N`; 0.0 when the term is
    /// absent from the field.
    pub fn idf(&self, total_docs: u32, df: u32) -> f32 {
        if df == 0 {
            return 0.0;
        }
        let n = total_docs as f32;
        let df = df as f32;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    /// Score one (term, field, document) match from raw statistics. Returns
    /// 0.0 for unmatched terms; a zero average field length (empty corpus
    /// for that field) disables length normalization rather than dividing
    /// by zero.
    pub fn score(
        &self,
        tf: u32,
        df: u32,
        total_docs: u32,
        field_len: u32,
        avg_field_len: f32,
    ) -> f32 {
        if tf == 0 || df == 0 {
            return 0.0;
        }
        let norm = if avg_field_len > 0.0 {
            1.0 - self.b + self.b * field_len as f32 / avg_field_len
        } else {
            1.0
        };
        let tf = tf as f32;
        self.idf(total_docs, df) * (tf * (self.k1 + 1.0)) / (tf + self.k1 * norm)
    }

    /// Convenience wrapper scoring a term against one document using the
    /// index's statistics.
    pub fn score_term(
        &self,
        index: &PositionalIndex,
        field: Field,
        term: &str,
        doc_id: DocId,
        tf: u32,
    ) -> f32 {
        self.score(
            tf,
            index.document_frequency(field, term),
            index.total_documents(),
            index.field_length(field, doc_id),
            index.average_field_length(field),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_decreases_as_df_grows() {
        let bm25 = Bm25::default();
        let idfs: Vec<f32> = [1, 2, 5, 9].iter().map(|&df| bm25.idf(10, df)).collect();
        for pair in idfs.windows(2) {
            assert!(pair[0] > pair[1], "idf must strictly decrease: {pair:?}");
        }
    }

    #[test]
    fn scores_are_non_negative() {
        let bm25 = Bm25::default();
        for tf in 0..5 {
            for df in 0..5 {
                for field_len in [0, 1, 50] {
                    for avg in [0.0, 1.0, 25.0] {
                        let s = bm25.score(tf, df, 4, field_len, avg);
                        assert!(s >= 0.0 && s.is_finite(), "tf={tf} df={df} -> {s}");
                    }
                }
            }
        }
    }

    #[test]
    fn absent_terms_score_zero() {
        let bm25 = Bm25::default();
        assert_eq!(bm25.score(0, 3, 10, 5, 4.0), 0.0);
        assert_eq!(bm25.score(3, 0, 10, 5, 4.0), 0.0);
    }

    #[test]
    fn zero_average_length_is_guarded() {
        let bm25 = Bm25::default();
        let s = bm25.score(2, 1, 1, 0, 0.0);
        assert!(s.is_finite() && s > 0.0);
    }

    #[test]
    fn saturation_favors_frequency_with_diminishing_returns() {
        let bm25 = Bm25::default();
        let s1 = bm25.score(1, 1, 10, 10, 10.0);
        let s2 = bm25.score(2, 1, 10, 10, 10.0);
        let s4 = bm25.score(4, 1, 10, 10, 10.0);
        assert!(s2 > s1 && s4 > s2);
        assert!(s2 - s1 > s4 - s2);
    }
}
