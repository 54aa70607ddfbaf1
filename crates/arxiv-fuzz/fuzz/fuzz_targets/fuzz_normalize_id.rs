#![no_main]

use arxiv_search::models::normalize_id;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let once = normalize_id(data);
    assert_eq!(normalize_id(&once), once);
});
