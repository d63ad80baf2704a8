#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(report) = alyvix_sensor::fuzzing::render_measures_input(data) {
        if !report.is_empty() {
            debug_assert!(report.contains(" Test case report: "));
        }
    }
});
