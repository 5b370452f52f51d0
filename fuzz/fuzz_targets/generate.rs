#![no_main]

use actiongen::config::GeneratorConfig;
use actiongen::generator::generate_unit;
use actiongen::model::CompilationUnit;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Only well-formed models reach the generator; errors are fine, panics are not
        if let Ok(unit) = CompilationUnit::from_json(s) {
            let _ = generate_unit(&unit, &GeneratorConfig::default());
        }
    }
});
