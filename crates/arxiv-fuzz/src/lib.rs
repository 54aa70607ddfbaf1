//! Fuzzing library for arxiv-search.
//!
//! This crate provides fuzzing targets for the Atom feed parser and
//! identifier normalization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-fuzz
//! cargo +nightly fuzz run fuzz_feed_parse -- -max_total_time=60
//! ```

pub use arxiv_search::{models, parser};
