//! arxiv-search - Entry Point
//!
//! Search arXiv, show paper details, download PDFs.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_search::client::split_categories;
use arxiv_search::config::{Config, api};
use arxiv_search::error::ClientError;
use arxiv_search::formatters::{
    format_details, format_download, format_search_results, paper_json, papers_json,
};
use arxiv_search::ArxivClient;

#[derive(Parser, Debug)]
#[command(name = "arxiv-search")]
#[command(about = "Search academic papers via arXiv")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search papers
    Search {
        /// Search query (arXiv query syntax, e.g. "ti:transformer AND abs:attention")
        query: String,

        /// Max results
        #[arg(long, default_value_t = api::DEFAULT_MAX_RESULTS, value_parser = clap::value_parser!(u32).range(1..))]
        max: u32,

        /// Filter by categories (comma-separated, e.g. cs.LG,cs.AI)
        #[arg(long)]
        categories: Option<String>,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Get paper details
    Details {
        /// arXiv ID (e.g. 2301.00001 or arXiv:2301.00001v2)
        arxiv_id: String,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Download paper PDF
    Download {
        /// arXiv ID
        arxiv_id: String,

        /// Output directory
        #[arg(short, long, env = "ARXIV_OUTPUT_DIR", default_value = api::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries command output, logs go to stderr
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), command = ?cli.command, "Starting arxiv-search");

    let config = Config::from_env()?;
    let client = ArxivClient::new(config)?;

    match cli.command {
        Command::Search { query, max, categories, json } => {
            let categories = categories.as_deref().map(split_categories).unwrap_or_default();
            let papers = client.search(&query, max, &categories).await?;

            if json {
                println!("{}", papers_json(&papers)?);
            } else {
                println!("{}", format_search_results(&papers));
            }
        }
        Command::Details { arxiv_id, json } => {
            let paper = client
                .details(&arxiv_id)
                .await?
                .ok_or_else(|| ClientError::not_found(arxiv_id.as_str()))?;

            if json {
                println!("{}", paper_json(&paper)?);
            } else {
                println!("{}", format_details(&paper));
            }
        }
        Command::Download { arxiv_id, output } => {
            let download = client
                .download_pdf(&arxiv_id, &output)
                .await
                .with_context(|| format!("Failed to download {arxiv_id}"))?;
            println!("{}", format_download(&download));
        }
    }

    Ok(())
}
