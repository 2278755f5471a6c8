//! Fuzz target for catalog JSON loading.
//!
//! Goal: arbitrary catalog text is rejected with an error, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_json
//! ```

#![no_main]

use bagcheck_catalog::{PolicyCatalog, StaticCatalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(catalog) = StaticCatalog::from_json_str(text, 5)
    {
        let _ = catalog.search("");
        let _ = catalog.search(text);
    }
});
