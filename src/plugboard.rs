use crate::{
    errors::EnigmaError,
    types::{Letter, MAX_PLUGBOARD_PAIRS},
};

/// Symmetric partial pairing over the alphabet, applied once before and
/// once after the rotor stack.
///
/// Stored as an involution table: `map[a] == b` implies `map[b] == a`,
/// and unpaired letters map to themselves.
#[derive(Debug, Clone)]
pub struct Plugboard {
    map: [u8; 26],
    pair_count: usize,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Empty board: every letter maps to itself.
    #[must_use]
    pub const fn new() -> Self {
        let mut map = [0u8; 26];
        let mut i = 0u8;
        while i < 26 {
            map[i as usize] = i;
            i += 1;
        }
        Self { map, pair_count: 0 }
    }

    /// Build a complete board from a batch of pairs, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidPlugboardPair` on the first pair that
    /// fails validation; no board is produced in that case.
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut board = Self::new();
        for &(a, b) in pairs {
            board.add_connection(a, b)?;
        }
        Ok(board)
    }

    /// Connect two letters. Input is folded to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidPlugboardPair` if the letters are
    /// equal, either is not an ASCII letter, either is already paired, or
    /// the board already holds 13 pairs.
    pub fn add_connection(&mut self, a: char, b: char) -> Result<(), EnigmaError> {
        let reject = |reason| EnigmaError::InvalidPlugboardPair {
            first: a,
            second: b,
            reason,
        };

        let (Some(first), Some(second)) = (Letter::from_char(a), Letter::from_char(b)) else {
            return Err(reject("not a letter"));
        };
        if first == second {
            return Err(reject("letter paired with itself"));
        }
        if self.map[usize::from(first.index())] != first.index()
            || self.map[usize::from(second.index())] != second.index()
        {
            return Err(reject("letter already paired"));
        }
        if self.pair_count == MAX_PLUGBOARD_PAIRS {
            return Err(reject("pair limit exceeded"));
        }

        self.map[usize::from(first.index())] = second.index();
        self.map[usize::from(second.index())] = first.index();
        self.pair_count += 1;
        Ok(())
    }

    /// The paired letter, or `c` itself when unpaired.
    #[must_use]
    pub fn swap(&self, c: Letter) -> Letter {
        Letter::wrapped(self.map[usize::from(c.index())])
    }

    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// The pairs in alphabetical order of their lower letter, for
    /// settings snapshots.
    #[must_use]
    pub fn pairs(&self) -> Vec<(char, char)> {
        let mut out = Vec::with_capacity(self.pair_count);
        for (i, &mapped) in self.map.iter().enumerate() {
            let i = u8::try_from(i).unwrap_or(0);
            if mapped > i {
                let (Some(a), Some(b)) = (Letter::from_index(i), Letter::from_index(mapped))
                else {
                    continue;
                };
                out.push((a.to_char(), b.to_char()));
            }
        }
        out
    }
}
