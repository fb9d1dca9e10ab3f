use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;
use watson_core::persist::{save_docs, save_index, save_meta, IndexPaths, MetaFile, FORMAT_VERSION};
use watson_core::{Analyzer, DocStore, PositionalIndex};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

mod wiki;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a positional index from wiki dump files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a wiki dump file or a directory of dump files
    Build {
        /// Input path (file or directory of .txt dump files)
        #[arg(long)]
        input: String,
        /// Output index directory
        #[arg(long)]
        output: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => build_index(&input, &output),
    }
}

fn build_index(input: &str, output: &str) -> Result<()> {
    let input_path = Path::new(input);

    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                files.push(p.to_path_buf());
            }
        }
        // deterministic file order keeps doc ids stable across rebuilds
        files.sort();
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    }

    let analyzer = Analyzer::new();
    let mut store = DocStore::new();
    let mut index = PositionalIndex::new();

    for file in &files {
        tracing::info!(file = %file.display(), "indexing file");
        let reader = BufReader::new(File::open(file)?);
        for page in wiki::parse_reader(reader)? {
            let id = store.add(page.title, page.categories, page.body);
            if let Some(doc) = store.get(id) {
                index.add_document(&analyzer, doc);
            }
        }
    }

    tracing::info!(
        num_docs = index.total_documents(),
        num_files = files.len(),
        "ingested documents"
    );

    let paths = IndexPaths::new(output);
    save_index(&paths, &index)?;
    save_docs(&paths, &store)?;
    let meta = MetaFile {
        num_docs: index.total_documents(),
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        version: FORMAT_VERSION,
    };
    save_meta(&paths, &meta)?;

    tracing::info!(output, "index build complete");
    Ok(())
}
