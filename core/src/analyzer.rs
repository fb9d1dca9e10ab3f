use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Toggles for the optional normalization stages. Whatever configuration is
/// used at index build time must be used at query time as well, or terms
/// silently stop matching.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    pub stem: bool,
    pub strip_stopwords: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { stem: true, strip_stopwords: true }
    }
}

/// English text analyzer: NFKC normalization, lowercasing, Unicode word
/// tokenization, stop-word removal, and Snowball stemming.
///
/// An `Analyzer` is constructed once and shared by reference between the
/// index build and the query side. Term positions are implicit: a term's
/// position is its index in the returned sequence.
pub struct Analyzer {
    stemmer: Stemmer,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { stemmer: Stemmer::create(Algorithm::English), config }
    }

    /// Normalize `text` into an ordered term sequence. Deterministic; empty
    /// or non-textual input yields an empty sequence, never an error.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut terms = Vec::new();
        for mat in TOKEN_RE.find_iter(&normalized) {
            let token = mat.as_str();
            if self.config.strip_stopwords && STOPWORDS.contains(token) {
                continue;
            }
            let term = if self.config.stem {
                self.stemmer.stem(token).to_string()
            } else {
                token.to_string()
            };
            terms.push(term);
        }
        terms
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_and_lowercases() {
        let analyzer = Analyzer::new();
        let terms = analyzer.analyze("Running, runner's RUN!");
        assert!(terms.iter().any(|t| t == "run"));
    }

    #[test]
    fn positions_are_post_filter_indices() {
        let analyzer = Analyzer::new();
        // "the" is a stop word, so "quick" and "fox" end up adjacent.
        let terms = analyzer.analyze("the quick fox");
        assert_eq!(terms, vec!["quick".to_string(), "fox".to_string()]);
    }

    #[test]
    fn stopword_stripping_can_be_disabled() {
        let analyzer = Analyzer::with_config(AnalyzerConfig { stem: false, strip_stopwords: false });
        let terms = analyzer.analyze("the quick fox");
        assert_eq!(terms, vec!["the", "quick", "fox"]);
    }

    #[test]
    fn empty_text_yields_no_terms() {
        let analyzer = Analyzer::new();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("  \t\n  ").is_empty());
        assert!(analyzer.analyze("1234 --- !!!").is_empty());
    }
}
