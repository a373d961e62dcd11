use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memrank", about = "Top-k retrieval over precomputed embeddings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the fixture corpus against a raw query vector
    Rank {
        /// Query vector as a JSON array, e.g. '[0.1, 0.9]'
        #[arg(long)]
        query: String,
        /// Number of results (defaults to MEMRANK_TOP_K or 3)
        #[arg(long, allow_hyphen_values = true)]
        k: Option<i64>,
        /// Fixture with precomputed vectors (defaults to MEMRANK_FIXTURE)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
    /// Retrieve snippets for a query text listed in the fixture
    Retrieve {
        text: String,
        #[arg(long, allow_hyphen_values = true)]
        k: Option<i64>,
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Print the prompt context block instead of JSON
        #[arg(long)]
        context: bool,
    },
    /// Show corpus size and dimension
    Stats {
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}
