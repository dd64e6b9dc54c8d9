//! Challenge registry lookup and solution validation.

use enigma_engine::{ChallengeRegistry, EnigmaError, Machine, MachineSettings, RotorSpec};

#[test]
fn first_challenge_is_the_warmup() {
    let challenge = ChallengeRegistry::first();
    assert_eq!(challenge.id, 1);
    assert_eq!(challenge.ciphertext, "BDZGO");
}

#[test]
fn lookup_by_id() {
    assert_eq!(ChallengeRegistry::get(2).unwrap().id, 2);
    assert_eq!(ChallengeRegistry::all().len(), 3);
}

#[test]
fn unknown_id_is_an_error_not_false() {
    assert_eq!(
        ChallengeRegistry::get(999).unwrap_err(),
        EnigmaError::ChallengeNotFound { id: 999 }
    );
    assert_eq!(
        ChallengeRegistry::validate_solution(999, "ANYTHING").unwrap_err(),
        EnigmaError::ChallengeNotFound { id: 999 }
    );
}

#[test]
fn warmup_ciphertext_is_reproducible_from_its_public_settings() {
    let challenge = ChallengeRegistry::first();
    let settings = MachineSettings {
        rotors: challenge.settings.rotors.clone(),
        reflector: challenge.settings.reflector.clone().unwrap(),
        plugboard: challenge.settings.plugboard.clone(),
    };

    let mut machine = Machine::new();
    machine.apply_settings(&settings).unwrap();
    assert_eq!(machine.encrypt_message("AAAAA").unwrap(), challenge.ciphertext);
}

#[test]
fn hidden_challenge_ciphertexts_are_engine_producible() {
    // Full settings reconstructed from the puzzle answers; the catalog
    // only publishes a subset of these.
    let mut machine = Machine::new();
    machine
        .apply_settings(&MachineSettings {
            rotors: vec![
                RotorSpec::new("II", 1, 4),
                RotorSpec::new("IV", 2, 5),
                RotorSpec::new("V", 3, 6),
            ],
            reflector: "B".to_owned(),
            plugboard: vec![('A', 'Q'), ('T', 'Z')],
        })
        .unwrap();
    assert_eq!(
        machine.encrypt_message("ATTACKATDAWN").unwrap(),
        ChallengeRegistry::get(2).unwrap().ciphertext
    );

    machine
        .apply_settings(&MachineSettings {
            rotors: vec![
                RotorSpec::new("III", 17, 0),
                RotorSpec::new("I", 2, 0),
                RotorSpec::new("IV", 10, 0),
            ],
            reflector: "C".to_owned(),
            plugboard: vec![('E', 'Z'), ('B', 'L'), ('X', 'P')],
        })
        .unwrap();
    assert_eq!(
        machine
            .encrypt_message("THEWEATHERFORECASTFORTODAYISCLEARSKIES")
            .unwrap(),
        ChallengeRegistry::get(3).unwrap().ciphertext
    );
}

#[test]
fn validation_ignores_case_and_punctuation() {
    assert!(ChallengeRegistry::validate_solution(1, "AAAAA").unwrap());
    assert!(ChallengeRegistry::validate_solution(1, "aaaaa").unwrap());
    assert!(ChallengeRegistry::validate_solution(1, "a a, a-a. a!").unwrap());
    assert!(ChallengeRegistry::validate_solution(2, "Attack at Dawn!").unwrap());
    assert!(ChallengeRegistry::validate_solution(
        3,
        "the weather forecast for today is clear skies"
    )
    .unwrap());
}

#[test]
fn single_letter_deviation_is_rejected() {
    assert!(!ChallengeRegistry::validate_solution(1, "AAAAB").unwrap());
    assert!(!ChallengeRegistry::validate_solution(1, "AAAA").unwrap());
    assert!(!ChallengeRegistry::validate_solution(2, "ATTACKATDUSK").unwrap());
}

#[test]
fn solution_is_never_serialized() {
    let value = serde_json::to_value(ChallengeRegistry::first()).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("ciphertext"));
    assert!(object.contains_key("info"));
    assert!(!object.contains_key("solution"));
}

#[test]
fn partial_settings_hide_what_the_puzzle_asks_for() {
    let challenge = ChallengeRegistry::get(2).unwrap();
    for rotor in &challenge.settings.rotors {
        assert_eq!(rotor.position, None);
        assert!(rotor.ring_setting.is_some());
    }

    let hard = ChallengeRegistry::get(3).unwrap();
    assert!(hard.settings.rotors.is_empty());
    assert!(hard.settings.plugboard.is_empty());
}
