#![no_main]

use libfuzzer_sys::fuzz_target;
use timecheck::config::loader::ConfigLoader;

fuzz_target!(|data: &[u8]| {
    if let Ok(json_str) = std::str::from_utf8(data) {
        let loader = ConfigLoader::with_defaults();

        // Only panics matter; a loaded config must uphold its invariants.
        if let Ok(result) = loader.load_from_str(json_str) {
            assert!(!result.config.legal_times.is_empty());
            assert!(result.config.tolerance >= 0.0);
            assert!(result.config.legal_times.iter().all(|t| *t >= 0.0));
        }
    }
});
