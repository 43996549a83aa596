#![no_main]
use libfuzzer_sys::fuzz_target;

use iocfang::fang::resolve::is_disjoint;
use iocfang::{transform, Direction};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let report = transform(text, Direction::Defang);
    let spans: Vec<_> = report.edits.iter().map(|e| e.span.clone()).collect();
    assert!(is_disjoint(&spans));
    for span in &spans {
        assert_eq!(&text[span.start..span.end], span.text);
    }
});
