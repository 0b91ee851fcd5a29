//! Per-character codec primitives for the digit-substitution scheme.
//!
//! Encoding renders a character's code point in decimal and substitutes
//! each digit with an alphabet symbol; decoding reverses the substitution
//! and reassembles the code point. Both directions work on Unicode scalar
//! values, never on UTF-8 or UTF-16 code units.

use log::trace;

use super::alphabet::Alphabet;
use super::error::{Result, TranscodeError};

/// Encode a single character into its token.
///
/// # Algorithm
/// 1. Take the character's code point (a non-negative integer).
/// 2. Render it in decimal, no leading zeros.
/// 3. Substitute each digit `d` with `alphabet.symbol_for_digit(d)`.
///
/// # Errors
/// Returns `UnsupportedCharacter` when a digit has no substitution
/// symbol. With a correctly derived 10-symbol alphabet this is
/// unreachable; the lookup stays guarded so a derivation defect surfaces
/// as an error rather than a panic.
pub fn encode_char(alphabet: &Alphabet, character: char) -> Result<String> {
    let digits = (character as u32).to_string();

    let mut token = String::with_capacity(digits.len());
    for digit in digits.chars() {
        let symbol = digit
            .to_digit(10)
            .and_then(|d| alphabet.symbol_for_digit(d))
            .ok_or(TranscodeError::UnsupportedCharacter { character })?;
        token.push(symbol);
    }

    trace!("Encoded {:?} as token {:?}", character, token);
    Ok(token)
}

/// Decode a single token back into its character.
///
/// `index` is the token's position in the encoded string, reported when
/// the token is empty.
///
/// # Algorithm
/// 1. Map each token symbol back to its digit via reverse lookup.
/// 2. Reassemble the digits into a code point value (checked against
///    overflow).
/// 3. Convert the value back into the character at that code point.
///
/// # Errors
/// - `EmptyToken` when the token has no symbols (adjacent or edge
///   delimiters in the encoded string).
/// - `UnknownSymbol` when a symbol is not part of the alphabet.
/// - `InvalidCodePoint` when the digits name no Unicode scalar value
///   (overflow, a surrogate, or a value above U+10FFFF).
pub fn decode_token(alphabet: &Alphabet, token: &str, index: usize) -> Result<char> {
    if token.is_empty() {
        return Err(TranscodeError::EmptyToken { index });
    }

    let mut value: u64 = 0;
    for symbol in token.chars() {
        let digit = alphabet
            .digit_for_symbol(symbol)
            .ok_or(TranscodeError::UnknownSymbol { symbol })?;
        value = value * 10 + u64::from(digit);
        if value > u64::from(u32::MAX) {
            return Err(TranscodeError::InvalidCodePoint { value });
        }
    }

    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or(TranscodeError::InvalidCodePoint { value })
}
