//! arXiv search client
//!
//! Queries the arXiv Atom API to search papers, look up a single paper and
//! download its PDF.
//!
//! # Features
//!
//! - **Namespace-aware feed parsing**: Atom and arXiv elements resolved by URI
//! - **Fault-tolerant**: a corrupt entry is skipped, the rest of the feed survives
//! - **Streaming downloads**: PDFs are written to disk chunk by chunk
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search::{client::ArxivClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!
//!     let papers = client.search("transformer attention", 5, &["cs.CL"]).await?;
//!     for paper in &papers {
//!         println!("{} {}", paper.id(), paper.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod parser;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, FeedError};
pub use models::PaperRecord;
