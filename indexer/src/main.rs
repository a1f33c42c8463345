use anyhow::{Context, Result};
use boolsearch_core::config::DEFAULT_BUCKET_COUNT;
use boolsearch_core::convert::{read_jsonl, records_from_value, DocumentRecord};
use boolsearch_core::{process_document, process_query, BooleanIndex, DocId, IndexConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Log a progress line every this many loaded documents.
const PROGRESS_EVERY: usize = 1000;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Normalize text and run boolean queries over an in-memory index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized terms for a piece of text
    Process {
        /// Text to normalize
        #[arg(long)]
        text: String,
        /// Normalize as a query (keeps and/or/not) instead of a document
        #[arg(long, default_value_t = false)]
        query: bool,
    },
    /// Index documents from JSON/JSONL files and run one query
    Search {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Query text, e.g. "cats and not dogs"
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
        /// Hash buckets in the term dictionary
        #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
        bucket_count: usize,
    },
    /// Index documents and print counts, or the whole index with --dump
    Stats {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = false)]
        dump: bool,
        #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
        bucket_count: usize,
    },
    /// Rank corpus terms by frequency against the Zipf prediction C / rank
    Zipf {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Only print the N most frequent terms
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Serialize)]
struct SearchOutput {
    query: String,
    terms: Vec<String>,
    total_hits: usize,
    doc_ids: Vec<DocId>,
}

#[derive(Serialize)]
struct StatsOutput {
    doc_count: usize,
    term_count: usize,
}

#[derive(Serialize, Debug, PartialEq)]
struct ZipfRow {
    rank: usize,
    term: String,
    frequency: usize,
    /// Frequency Zipf's law predicts at this rank: top frequency / rank.
    zipf_frequency: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Process { text, query } => {
            let processed = if query { process_query(&text) } else { process_document(&text) };
            println!("{}", serde_json::to_string_pretty(&processed)?);
        }
        Commands::Search { input, query, offset, limit, bucket_count } => {
            let index = load_index(Path::new(&input), IndexConfig::with_bucket_count(bucket_count))?;
            let out = run_search(&index, &query, offset, limit);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Stats { input, dump, bucket_count } => {
            let index = load_index(Path::new(&input), IndexConfig::with_bucket_count(bucket_count))?;
            if dump {
                println!("{}", serde_json::to_string_pretty(&index.index_data())?);
            } else {
                let stats = StatsOutput { doc_count: index.document_count(), term_count: index.term_count() };
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Commands::Zipf { input, top } => {
            let records = load_records(Path::new(&input))?;
            let rows = zipf_rows(&records, top);
            tracing::info!(distinct_terms = rows.len(), "zipf ranking done");
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn run_search(index: &BooleanIndex, query: &str, offset: usize, limit: usize) -> SearchOutput {
    let terms = process_query(query).terms;
    let hits = index.search(&terms);
    let total_hits = hits.len();
    let doc_ids = hits.into_iter().skip(offset).take(limit).collect();
    SearchOutput { query: query.to_owned(), terms, total_hits, doc_ids }
}

fn zipf_rows(records: &[DocumentRecord], top: Option<usize>) -> Vec<ZipfRow> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for term in &record.terms {
            *freq.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let top_freq = ranked.first().map(|&(_, f)| f).unwrap_or(0);
    ranked
        .into_iter()
        .take(top.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, (term, frequency))| ZipfRow {
            rank: i + 1,
            term: term.to_owned(),
            frequency,
            zipf_frequency: top_freq as f64 / (i + 1) as f64,
        })
        .collect()
}

fn collect_files(input_path: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    }
    files
}

fn load_records(input_path: &Path) -> Result<Vec<DocumentRecord>> {
    let mut records = Vec::new();
    for file in collect_files(input_path) {
        if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            records.extend(read_jsonl_file(&file)?);
        } else {
            records.extend(read_json_file(&file)?);
        }
    }
    Ok(records)
}

fn load_index(input_path: &Path, config: IndexConfig) -> Result<BooleanIndex> {
    let mut index = BooleanIndex::with_config(config);
    for (n, record) in load_records(input_path)?.into_iter().enumerate() {
        index.add_document(record.id, &record.terms);
        if (n + 1) % PROGRESS_EVERY == 0 {
            tracing::info!(loaded = n + 1, "loading documents");
        }
    }
    tracing::info!(
        num_docs = index.document_count(),
        num_terms = index.term_count(),
        "index loaded"
    );
    Ok(index)
}

fn read_jsonl_file(file: &Path) -> Result<Vec<DocumentRecord>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let records = read_jsonl(BufReader::new(f)).with_context(|| format!("reading {}", file.display()))?;
    Ok(records)
}

fn read_json_file(file: &Path) -> Result<Vec<DocumentRecord>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))?;
    let records = records_from_value(&json).with_context(|| format!("reading {}", file.display()))?;
    Ok(records)
}
