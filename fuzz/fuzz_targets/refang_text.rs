#![no_main]
use libfuzzer_sys::fuzz_target;

use iocfang::{defang, refang};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let restored = refang(text);
    // Refanged text has no markers left for a second pass to touch.
    if !restored.contains("[.]") && !restored.contains("[@]") {
        assert_eq!(refang(&restored), restored);
    }
    let _ = defang(&restored);
});
