use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use revrec_core::recommender::{DEFAULT_MIN_SCORE, DEFAULT_TOP_K};
use revrec_core::{FitConfig, RawRecord, Recommender};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// One row of the reviews CSV. Only these columns are read; any extra
/// columns in the source file are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    id: String,
    #[serde(default)]
    review_title: Option<String>,
    #[serde(default)]
    review_content: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    author: Option<String>,
}

impl From<CsvRecord> for RawRecord {
    fn from(row: CsvRecord) -> Self {
        RawRecord {
            id: row.id,
            title: row.review_title,
            body: row.review_content,
            rating: row.rating,
            author: row.author,
        }
    }
}

#[derive(Parser)]
#[command(name = "revrec")]
#[command(about = "Content-based review recommender over a TF-IDF corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a reviews CSV and print the reviews most similar to one id
    Run {
        /// Path to the reviews CSV
        source: String,
        /// External id of the query review
        query_id: String,
        /// Number of recommendations to return
        #[arg(default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        /// Drop results scoring below this cosine similarity
        #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
        min_score: f32,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source,
            query_id,
            top_k,
            min_score,
        } => run(&source, &query_id, top_k, min_score),
    }
}

fn run(source: &str, query_id: &str, top_k: usize, min_score: f32) -> Result<()> {
    let records = read_records(source)?;
    let recommender = Recommender::fit(records, &FitConfig::default());
    let hits = recommender.recommend(query_id, top_k, min_score);

    if hits.is_empty() {
        println!("\nNo recommendations for id: {query_id}");
    } else {
        println!("\nTop {} reviews similar to {query_id}:", hits.len());
        for (rank, hit) in hits.iter().enumerate() {
            println!("  {}. ID {:>10}  |  Score: {:.3}", rank + 1, hit.id, hit.score);
        }
    }
    Ok(())
}

fn read_records(path: &str) -> Result<Vec<RawRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening source file {path}"))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRecord = row.with_context(|| format!("malformed row in {path}"))?;
        records.push(row.into());
    }
    tracing::info!(num_records = records.len(), path, "ingested records");
    Ok(records)
}
