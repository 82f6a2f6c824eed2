#![no_main]

use cv_version::Version;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::parse(data) {
        let reparsed = Version::parse(&version.to_string()).unwrap();
        assert_eq!(version, reparsed);
        assert_eq!(version.hash_code(), reparsed.hash_code());
    }
});
