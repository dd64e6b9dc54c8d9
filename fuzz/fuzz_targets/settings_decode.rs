#![no_main]

use enigma_engine::{Machine, MachineSettings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the settings surface with arbitrary JSON: decode must never
    // panic, and a rejected configuration must leave the machine
    // unconfigured.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(settings) = serde_json::from_str::<MachineSettings>(text) else {
        return;
    };

    let mut machine = Machine::new();
    if machine.apply_settings(&settings).is_err() {
        assert!(machine.settings().is_none());
    }
});
