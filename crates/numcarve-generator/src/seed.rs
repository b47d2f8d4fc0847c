//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 32-byte seed identifying one generated puzzle.
///
/// The seed fully determines the random number generator used for solution
/// generation and carving, so a puzzle can be reproduced from its seed alone.
/// The text form is 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use numcarve_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the random number generator seeded by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error returned when parsing a [`PuzzleSeed`] from its hex form fails.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParsePuzzleSeedError {
    /// The input was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contained a non-hex character.
    #[display("invalid character {_0:?} in seed")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParsePuzzleSeedError::InvalidLength(len));
        }
        let mut bytes = [0_u8; 32];
        for (i, ch) in s.chars().enumerate() {
            let value = ch
                .to_digit(16)
                .ok_or(ParsePuzzleSeedError::InvalidCharacter(ch))?;
            #[expect(clippy::cast_possible_truncation)]
            {
                bytes[i / 2] = (bytes[i / 2] << 4) | value as u8;
            }
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        assert_eq!(seed.to_string(), "ab".repeat(32));
        assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));

        let zero = PuzzleSeed::from_bytes([0; 32]);
        assert_eq!(zero.to_string(), "0".repeat(64));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidLength(3))
        );
        assert_eq!(
            format!("g{}", "0".repeat(63)).parse::<PuzzleSeed>(),
            Err(ParsePuzzleSeedError::InvalidCharacter('g'))
        );
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed = PuzzleSeed::from_bytes([9; 32]);
        let mut a = seed.rng();
        let mut b = seed.rng();
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(bytes in prop::array::uniform32(any::<u8>())) {
            let seed = PuzzleSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
        }
    }
}
