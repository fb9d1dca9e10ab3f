use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use watson_core::persist::{load_all, IndexPaths};
use watson_core::{eval, Analyzer, Bm25, Evaluator, QueryBuilder, RankStats, Searcher};

use std::fs::File;
use std::io::BufReader;

mod queries;

#[derive(Parser)]
#[command(name = "evaluator")]
#[command(
    about = "Run clue queries against a built index and report rank statistics",
    long_about = None
)]
struct Args {
    /// Index directory produced by the indexer
    #[arg(long, default_value = "./index")]
    index: String,
    /// Query file (category / clue / answer line groups)
    #[arg(long)]
    queries: String,
    /// Number of ranked results to retrieve per query
    #[arg(long, default_value_t = 10)]
    top_k: usize,
    /// BM25 term-frequency saturation parameter
    #[arg(long, default_value_t = 1.14)]
    k1: f32,
    /// BM25 length-normalization parameter
    #[arg(long, default_value_t = 0.15)]
    b: f32,
    /// Treat expected answers as regex patterns instead of exact titles
    #[arg(long, default_value_t = false)]
    pattern: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let paths = IndexPaths::new(&args.index);
    let (index, store, meta) = load_all(&paths)?;
    tracing::info!(num_docs = meta.num_docs, created_at = %meta.created_at, "index loaded");

    let analyzer = Analyzer::new();
    let builder = QueryBuilder::new(&analyzer);
    let searcher = Searcher::with_similarity(&index, &store, Bm25::new(args.k1, args.b));
    let evaluator = if args.pattern {
        Evaluator::with_matcher(&store, eval::pattern_matcher())
    } else {
        Evaluator::new(&store)
    };

    let clue_queries = queries::parse_reader(BufReader::new(File::open(&args.queries)?))?;
    tracing::info!(num_queries = clue_queries.len(), "running queries");

    let mut stats = RankStats::new();
    println!("---------------QUERY RESULTS--------------------------");
    for (number, q) in clue_queries.iter().enumerate() {
        let query = builder.build(&q.clue, &q.category);
        let results = searcher.execute(&query, args.top_k);
        let rank = evaluator.rank_of(&results, &q.answer);

        println!();
        println!("Answer to question {}: {}", number + 1, q.answer);
        if rank > 0 {
            println!("Hit at position: {rank}");
        }
        stats.record(rank);
    }

    print_statistics(&stats, args.top_k);
    Ok(())
}

fn print_statistics(stats: &RankStats, top_k: usize) {
    println!("---------------STATISTICS-----------------------------");
    for position in 1..=top_k {
        println!("Docs in position {position}: {}", stats.count_at(position));
    }
    println!();
    println!("Hits in top {} documents: {}", top_k, stats.hits_in_top(top_k));
    println!("P@1: {:.4}", stats.precision_at_1());
}
