//! Custom error types for the keymask crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The key cannot seed a substitution alphabet and a delimiter.
    #[error("Key must contain at least 11 distinct characters, but only {distinct} found.")]
    InvalidKey { distinct: usize },

    /// The post-encode self-check failed: decoding the freshly encoded
    /// output did not reproduce the source. Signals a derivation defect
    /// (or input the scheme cannot represent), not ordinary bad input.
    #[error("Round-trip validation failed: decoding the encoded output did not reproduce the source.")]
    RoundTripValidation,

    /// A source character could not be rendered through the
    /// digit-substitution scheme.
    #[error("Unsupported character {character:?}: no substitution symbol for one of its digits")]
    UnsupportedCharacter { character: char },

    /// An encoded token contains a character outside the substitution
    /// alphabet, indicating malformed or foreign input.
    #[error("Unknown symbol {symbol:?}: not part of the substitution alphabet")]
    UnknownSymbol { symbol: char },

    /// An encoded token is empty: adjacent delimiters, a delimiter at the
    /// start or end of the input, or an empty input string.
    #[error("Empty token at index {index}: no symbols between delimiters")]
    EmptyToken { index: usize },

    /// The digits recovered from a token name no valid Unicode scalar
    /// value (overflow, a surrogate, or a value above U+10FFFF).
    #[error("Invalid code point {value}: not a Unicode scalar value")]
    InvalidCodePoint { value: u64 },
}

/// A convenience `Result` type alias using the crate's `TranscodeError` type.
pub type Result<T> = std::result::Result<T, TranscodeError>;
