#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(args) = alyvix_sensor::fuzzing::apply_config_from_json(data) {
        debug_assert!(!args.request_timeout.is_zero());
        debug_assert!(!args.connect_timeout.is_zero());
        if let Some(alias) = args.test_case_alias.as_deref() {
            debug_assert!(!alias.trim().is_empty());
        }
    }
});
