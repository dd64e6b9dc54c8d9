use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::EnigmaError, types::RotorSpec};

/// The public (possibly partial) description of the configuration a
/// challenge ciphertext was produced under. Hidden values stay `None`;
/// recovering them is part of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSettings {
    pub rotors: Vec<RotorSpec>,
    pub reflector: Option<String>,
    pub plugboard: Vec<(char, char)>,
}

/// A puzzle from the static catalog. The stored solution is private to
/// this module and is only ever used for comparison; it is skipped on
/// serialization and has no accessor.
#[derive(Debug, Clone, Serialize)]
pub struct Challenge {
    pub id: u32,
    pub ciphertext: String,
    pub settings: ChallengeSettings,
    pub info: String,
    #[serde(skip_serializing)]
    solution: String,
}

/// Uppercase and strip everything that is not an ASCII letter, the
/// canonical form solutions are compared in.
#[must_use]
pub fn normalize_solution(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Static puzzle catalog with solution checking.
///
/// All ciphertexts were produced by this engine under the settings they
/// carry (public view included), so a correctly configured [`Machine`]
/// round-trips each of them.
///
/// [`Machine`]: crate::machine::Machine
pub struct ChallengeRegistry;

impl ChallengeRegistry {
    /// Every challenge in the catalog, in id order.
    #[must_use]
    pub fn all() -> &'static [Challenge] {
        catalog()
    }

    /// The default challenge served when no id is given.
    #[must_use]
    pub fn first() -> &'static Challenge {
        &catalog()[0]
    }

    /// Look up a challenge by id.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::ChallengeNotFound` for an unknown id.
    pub fn get(id: u32) -> Result<&'static Challenge, EnigmaError> {
        catalog()
            .iter()
            .find(|c| c.id == id)
            .ok_or(EnigmaError::ChallengeNotFound { id })
    }

    /// Compare a candidate against the stored solution, ignoring case
    /// and any non-letter characters.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::ChallengeNotFound` for an unknown id - an
    /// unknown challenge is an error, never a `false`.
    pub fn validate_solution(id: u32, candidate: &str) -> Result<bool, EnigmaError> {
        let challenge = Self::get(id)?;
        let correct = normalize_solution(candidate) == normalize_solution(&challenge.solution);
        debug!(id, correct, "solution validated");
        Ok(correct)
    }
}

static CATALOG: OnceLock<Vec<Challenge>> = OnceLock::new();

fn catalog() -> &'static [Challenge] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

fn build_catalog() -> Vec<Challenge> {
    vec![
        Challenge {
            id: 1,
            ciphertext: "BDZGO".to_owned(),
            settings: ChallengeSettings {
                rotors: vec![
                    RotorSpec::new("I", 0, 0),
                    RotorSpec::new("II", 0, 0),
                    RotorSpec::new("III", 0, 0),
                ],
                reflector: Some("B".to_owned()),
                plugboard: vec![],
            },
            info: "Warm-up: the full settings are public. Configure the machine, \
                   feed it the ciphertext, and read off the plaintext."
                .to_owned(),
            solution: "AAAAA".to_owned(),
        },
        Challenge {
            id: 2,
            ciphertext: "YLFYFYZUWMID".to_owned(),
            settings: ChallengeSettings {
                rotors: vec![
                    RotorSpec {
                        name: "II".to_owned(),
                        position: None,
                        ring_setting: Some(4),
                    },
                    RotorSpec {
                        name: "IV".to_owned(),
                        position: None,
                        ring_setting: Some(5),
                    },
                    RotorSpec {
                        name: "V".to_owned(),
                        position: None,
                        ring_setting: Some(6),
                    },
                ],
                reflector: Some("B".to_owned()),
                plugboard: vec![('A', 'Q'), ('T', 'Z')],
            },
            info: "An intercepted order, twelve letters long. Rotor order, ring \
                   settings, reflector and plugboard are known; the three starting \
                   positions were lost with the operator's key sheet."
                .to_owned(),
            solution: "ATTACKATDAWN".to_owned(),
        },
        Challenge {
            id: 3,
            ciphertext: "WQJKOEDKIPRKLIPZAVZHCXCFWGJVJZZNKTNOPE".to_owned(),
            settings: ChallengeSettings {
                rotors: vec![],
                reflector: Some("C".to_owned()),
                plugboard: vec![],
            },
            info: "A routine broadcast, sent every morning in the same format. \
                   Only the reflector is known. Weather reports make famously \
                   good cribs."
                .to_owned(),
            solution: "THEWEATHERFORECASTFORTODAYISCLEARSKIES".to_owned(),
        },
    ]
}
