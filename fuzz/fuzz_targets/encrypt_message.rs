#![no_main]

use enigma_engine::{Machine, MachineSettings, RotorSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let mut machine = Machine::new();
    machine
        .apply_settings(&MachineSettings {
            rotors: vec![
                RotorSpec::new("I", 0, 0),
                RotorSpec::new("II", 4, 11),
                RotorSpec::new("III", 21, 2),
            ],
            reflector: "B".to_owned(),
            plugboard: vec![('A', 'Q'), ('T', 'Z')],
        })
        .expect("static settings are valid");

    // Arbitrary input must encipher without panicking and preserve the
    // character count (non-letters are echoed verbatim).
    let out = machine.encrypt_message(&text).expect("machine is configured");
    assert_eq!(out.chars().count(), text.chars().count());
});
