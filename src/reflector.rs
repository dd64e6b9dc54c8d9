use crate::{errors::EnigmaError, types::Letter};

/// Historical reflector (UKW) wirings. Each is an involution with no
/// fixed point, a structural property of the physical wiring.
const CATALOG: &[(&str, &[u8; 26])] = &[
    ("A", b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// Fixed involutive permutation that turns the forward pass through the
/// rotor stack into the backward pass. Immutable once selected.
#[derive(Debug, Clone)]
pub struct Reflector {
    name: &'static str,
    wiring: [u8; 26],
}

impl Reflector {
    /// Select a reflector from the catalog by name.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::UnknownReflector` if `name` is not in the
    /// catalog.
    pub fn create(name: &str) -> Result<Self, EnigmaError> {
        let Some(&(catalog_name, table)) = CATALOG.iter().find(|(n, _)| *n == name) else {
            return Err(EnigmaError::UnknownReflector {
                name: name.to_owned(),
            });
        };
        let mut wiring = [0u8; 26];
        for (i, &w) in table.iter().enumerate() {
            wiring[i] = w - b'A';
        }
        Ok(Self {
            name: catalog_name,
            wiring,
        })
    }

    /// Reflect a letter. Never the identity: `reflect(c) != c` for every
    /// catalog wiring.
    #[must_use]
    pub fn reflect(&self, c: Letter) -> Letter {
        Letter::wrapped(self.wiring[usize::from(c.index())])
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
