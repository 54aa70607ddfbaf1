#![no_main]

use arxiv_search::parser::parse_feed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes either fail as a whole or yield records with an id.
    if let Ok(papers) = parse_feed(data) {
        for paper in &papers {
            assert!(!paper.id().is_empty());
        }
    }
});
