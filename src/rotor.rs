use crate::{
    errors::EnigmaError,
    types::{Letter, ALPHABET_LEN},
};

/// Historical Enigma I rotor wirings with their turnover notch positions.
const CATALOG: &[(&str, &[u8; 26], &[u8])] = &[
    ("I", b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", &[16]),   // turnover at Q
    ("II", b"AJDKSIRUXBLHWTMCQGZNPYFVOE", &[4]),   // turnover at E
    ("III", b"BDFHJLCPRTXVZNYEIWGAKMUSQO", &[21]), // turnover at V
    ("IV", b"ESOVPZJAYQUIRHXLNFTGKDCMWB", &[9]),   // turnover at J
    ("V", b"VZBRGITYUPSDNHLXAWMJQOFECK", &[25]),   // turnover at Z
];

/// A wired rotor disc: a fixed letter permutation with a rotating offset
/// (`position`) and a static internal alignment (`ring_setting`).
///
/// Both offsets are kept reduced mod 26. The backward table is the exact
/// inverse of the forward table, computed once at construction.
#[derive(Debug, Clone)]
pub struct Rotor {
    name: &'static str,
    forward: [u8; 26],
    backward: [u8; 26],
    notches: &'static [u8],
    position: u8,
    ring_setting: u8,
}

impl Rotor {
    /// Build a rotor from the named wiring table.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::UnknownRotorName` if `name` is not in the
    /// catalog, or `EnigmaError::InvalidRange` if `position` or
    /// `ring_setting` is 26 or more.
    pub fn create(name: &str, position: u8, ring_setting: u8) -> Result<Self, EnigmaError> {
        let Some(&(catalog_name, wiring, notches)) =
            CATALOG.iter().find(|(n, _, _)| *n == name)
        else {
            return Err(EnigmaError::UnknownRotorName {
                name: name.to_owned(),
            });
        };
        if position >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidRange {
                field: "position",
                value: position,
            });
        }
        if ring_setting >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidRange {
                field: "ring_setting",
                value: ring_setting,
            });
        }

        let mut forward = [0u8; 26];
        let mut backward = [0u8; 26];
        for (i, &w) in wiring.iter().enumerate() {
            let out = w - b'A';
            forward[i] = out;
            backward[usize::from(out)] = u8::try_from(i).unwrap_or(0);
        }

        Ok(Self {
            name: catalog_name,
            forward,
            backward,
            notches,
            position,
            ring_setting,
        })
    }

    /// Net offset between the entry contact and the wiring core.
    const fn shift(&self) -> u8 {
        (self.position + ALPHABET_LEN - self.ring_setting) % ALPHABET_LEN
    }

    /// Map a letter through the wiring, right-to-left (towards the
    /// reflector). Exact inverse of [`encode_backward`](Self::encode_backward)
    /// at the same position and ring setting.
    #[must_use]
    pub fn encode_forward(&self, c: Letter) -> Letter {
        let s = self.shift();
        let entry = (c.index() + s) % ALPHABET_LEN;
        Letter::wrapped(self.forward[usize::from(entry)] + ALPHABET_LEN - s)
    }

    /// Map a letter through the inverse wiring, left-to-right (back from
    /// the reflector).
    #[must_use]
    pub fn encode_backward(&self, c: Letter) -> Letter {
        let s = self.shift();
        let entry = (c.index() + s) % ALPHABET_LEN;
        Letter::wrapped(self.backward[usize::from(entry)] + ALPHABET_LEN - s)
    }

    /// True when the rotor sits on one of its turnover notches, i.e. the
    /// next step of this rotor carries the neighbour with it.
    #[must_use]
    pub fn is_at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }

    /// Advance the rotational offset by one, wrapping at Z.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    #[must_use]
    pub const fn ring_setting(&self) -> u8 {
        self.ring_setting
    }
}
