//! Substitution alphabet and delimiter derivation

use log::debug;

use super::error::{Result, TranscodeError};

/// Number of substitution symbols, one per decimal digit.
pub const ALPHABET_LEN: usize = 10;

/// Minimum distinct key characters: 10 symbols plus 1 delimiter.
pub const MIN_DISTINCT_CHARS: usize = ALPHABET_LEN + 1;

/// The substitution alphabet and token delimiter derived from a key.
///
/// `symbols[d]` is the substitution symbol for decimal digit `d`. The
/// delimiter separates per-character tokens in encoded output. Both come
/// from a single de-duplicated sequence, so the delimiter never collides
/// with a symbol.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: [char; ALPHABET_LEN],
    delimiter: char,
}

impl Alphabet {
    /// Derive the alphabet and delimiter from a key.
    ///
    /// Derivation:
    /// 1. De-duplicate the key's characters preserving first-occurrence
    ///    order. This is a linear scan over a `Vec`, never an unordered
    ///    set — the ordering must be identical across processes and runs.
    /// 2. The first 10 distinct characters substitute digits 0-9.
    /// 3. The 11th distinct character becomes the delimiter.
    ///
    /// Distinct characters beyond the 11th do not affect the derivation.
    ///
    /// # Errors
    /// Returns an error if the key has fewer than 11 distinct characters.
    pub fn derive(key: &str) -> Result<Self> {
        let mut distinct: Vec<char> = Vec::with_capacity(MIN_DISTINCT_CHARS);
        for ch in key.chars() {
            if !distinct.contains(&ch) {
                distinct.push(ch);
                if distinct.len() == MIN_DISTINCT_CHARS {
                    break;
                }
            }
        }

        if distinct.len() < MIN_DISTINCT_CHARS {
            return Err(TranscodeError::InvalidKey {
                distinct: distinct.len(),
            });
        }

        let mut symbols = ['\0'; ALPHABET_LEN];
        symbols.copy_from_slice(&distinct[..ALPHABET_LEN]);
        let delimiter = distinct[ALPHABET_LEN];

        debug!(
            "Derived substitution alphabet {:?} with delimiter {:?}",
            symbols, delimiter
        );

        Ok(Self { symbols, delimiter })
    }

    /// The substitution symbol for a decimal digit (0-9).
    pub fn symbol_for_digit(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Reverse lookup: the decimal digit a symbol substitutes.
    ///
    /// The alphabet holds 10 entries, so a linear scan is as cheap as any
    /// lookup table.
    pub fn digit_for_symbol(&self, symbol: char) -> Option<u32> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|i| i as u32)
    }

    /// All 10 substitution symbols, in digit order.
    pub fn symbols(&self) -> &[char; ALPHABET_LEN] {
        &self.symbols
    }

    /// The token delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}
