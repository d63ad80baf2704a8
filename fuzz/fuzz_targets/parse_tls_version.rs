#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(version) = alyvix_sensor::fuzzing::parse_tls_version_input(input) {
            debug_assert!(matches!(
                version,
                alyvix_sensor::args::TlsVersion::V1_0
                    | alyvix_sensor::args::TlsVersion::V1_1
                    | alyvix_sensor::args::TlsVersion::V1_2
                    | alyvix_sensor::args::TlsVersion::V1_3
            ));
        }
    }
});
