use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    #[error("unknown rotor name: {name}")]
    UnknownRotorName { name: String },

    #[error("unknown reflector: {name}")]
    UnknownReflector { name: String },

    #[error("{field} out of range: {value} not in [0, 26)")]
    InvalidRange { field: &'static str, value: u8 },

    #[error("invalid rotor count: expected 3 got {got}")]
    InvalidRotorCount { got: usize },

    #[error("invalid plugboard pair {first}-{second}: {reason}")]
    InvalidPlugboardPair {
        first: char,
        second: char,
        reason: &'static str,
    },

    #[error("machine not configured")]
    MachineNotConfigured,

    #[error("challenge not found: {id}")]
    ChallengeNotFound { id: u32 },
}
