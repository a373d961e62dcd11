use clap::Parser;
use memrank::application::retrieve::render_context;
use memrank::cli::commands::{Cli, Commands};
use memrank::config::Config;
use memrank::domain::values::top_k::TopK;
use memrank::MemRank;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memrank=warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = run_command(config, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Rank { query, k, fixture } => {
            let mr = MemRank::from_fixture(config, fixture)?;
            let vector: Vec<f64> = serde_json::from_str(&query)
                .map_err(|e| format!("--query must be a JSON array of numbers: {e}"))?;
            let results = mr.rank_vector(&vector, TopK::from_arg(k)?)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Retrieve {
            text,
            k,
            fixture,
            context,
        } => {
            let mr = MemRank::from_fixture(config, fixture)?;
            let results = mr.retrieve(&text, TopK::from_arg(k)?).await?;
            if context {
                println!("{}", render_context(&results));
            } else {
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
        }
        Commands::Stats { fixture } => {
            let mr = MemRank::from_fixture(config, fixture)?;
            println!("{}", serde_json::to_string_pretty(&mr.stats())?);
        }
    }
    Ok(())
}
