#![no_main]

use depgen::domain::entities::RawManifest;
use depgen::{validate, Engine, OutputType, ResolvePolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Parse, validate and resolve: none of it may panic
    let Ok(raw) = serde_yaml_ng::from_str::<RawManifest>(content) else {
        return;
    };
    let Ok(manifest) = validate(&raw, ResolvePolicy::default()) else {
        return;
    };
    let Ok(engine) = Engine::new(manifest) else {
        return;
    };
    let keys: Vec<String> = engine
        .manifest()
        .files()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    for key in &keys {
        // Bound the cross product so one input cannot stall the fuzzer
        match engine.combinations(key, None) {
            Ok(space) if space.len() <= 256 => {}
            _ => continue,
        }
        let _ = engine.resolve_all(key, OutputType::Conda, None);
    }
});
