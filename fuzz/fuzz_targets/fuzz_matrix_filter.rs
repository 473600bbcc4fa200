#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        // Fuzz `--matrix` parsing - this should never panic
        let _ = depgen::MatrixFilter::parse(spec);
    }
});
