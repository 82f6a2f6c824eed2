#![no_main]

use cv_version::Comparator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let comparator = Comparator::new();
    let (left, right) = data;
    if let (Ok(forward), Ok(backward)) = (
        comparator.compare(left, right),
        comparator.compare(right, left),
    ) {
        assert_eq!(forward, backward.reverse());
    }
});
