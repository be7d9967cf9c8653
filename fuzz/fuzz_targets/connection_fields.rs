//! Fuzz target for connection string field extraction.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_connection_fields
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use pgpeek_conn::{ConnectionFields, DEFAULT_PORT, NOT_SPECIFIED};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let fields = ConnectionFields::extract(input);

        // Extraction is pure
        assert_eq!(fields, ConnectionFields::extract(input));

        if !input.contains("sslmode=") {
            assert_eq!(fields.ssl_mode, NOT_SPECIFIED);
        }
        if !input.contains('@') {
            assert_eq!(fields.host, NOT_SPECIFIED);
        }
        if input.matches(':').count() < 2 {
            assert_eq!(fields.port, DEFAULT_PORT);
        }
    }
});
