use serde::{Deserialize, Serialize};

pub const ALPHABET_LEN: u8 = 26; // letters per rotor ring
pub const ROTOR_COUNT: usize = 3; // canonical machine: exactly three rotors
pub const MAX_PLUGBOARD_PAIRS: usize = 13; // every letter paired

/// Index of a letter in the 26-letter alphabet, always in `[0, 26)`.
///
/// The newtype keeps non-letters out of the permutation network: anything
/// that reaches the rotor stack has already been folded to uppercase and
/// range-checked.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Fold an ASCII letter (either case) to its alphabet index.
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Wrap a raw alphabet index; `None` when out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Reduce an arbitrary index mod 26. Internal helper for wiring
    /// arithmetic, which never leaves the alphabet by more than one wrap.
    pub(crate) const fn wrapped(index: u8) -> Self {
        Self(index % ALPHABET_LEN)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        (self.0 + b'A') as char
    }
}

/// Rotor description as supplied by the caller. Unset `position` or
/// `ring_setting` defaults to 0 at validation time. Also serves as the
/// public (possibly partial) rotor view in challenge metadata, where a
/// hidden value stays `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub name: String,
    #[serde(default)]
    pub position: Option<u8>,
    #[serde(default)]
    pub ring_setting: Option<u8>,
}

impl RotorSpec {
    /// Spec with explicit position and ring setting.
    #[must_use]
    pub fn new(name: &str, position: u8, ring_setting: u8) -> Self {
        Self {
            name: name.to_owned(),
            position: Some(position),
            ring_setting: Some(ring_setting),
        }
    }

    /// Spec relying on the defaulting rule (position 0, ring 0).
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            position: None,
            ring_setting: None,
        }
    }
}

/// Committed per-rotor state as reported by `Machine::settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSetting {
    pub name: String,
    pub position: u8,
    pub ring_setting: u8,
}

/// Full configuration request: three rotors left to right, a reflector
/// name, and the complete plugboard pairing. Validated as a unit before
/// any machine state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    pub rotors: Vec<RotorSpec>,
    pub reflector: String,
    #[serde(default)]
    pub plugboard: Vec<(char, char)>,
}

/// Snapshot of a committed configuration, rotor positions included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub rotors: [RotorSetting; ROTOR_COUNT],
    pub reflector: String,
    pub plugboard: Vec<(char, char)>,
}
