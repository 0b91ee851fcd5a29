//! Core transcoder module

pub mod error;
mod alphabet;
mod codec;

use log::{info, trace};

use alphabet::Alphabet;
pub use alphabet::{ALPHABET_LEN, MIN_DISTINCT_CHARS};
pub use error::{Result, TranscodeError};

/// A reversible, keyword-parameterized text transcoder.
///
/// Derives a 10-symbol substitution alphabet and a token delimiter from a
/// key, then encodes each source character as the alphabet-substituted
/// decimal digits of its code point, with tokens joined by the delimiter.
/// `encode` and `decode` are mutual inverses for every input `encode`
/// accepts.
///
/// All state is fixed at construction — no interior mutability, no caches,
/// no retained state across calls — so one instance can serve any number
/// of threads concurrently.
pub struct Transcoder {
    key: String,
    alphabet: Alphabet,
}

impl Transcoder {
    /// Construct a transcoder from the given key.
    ///
    /// The key must contain at least 11 distinct characters: the first 10
    /// distinct characters (in first-occurrence order) become the
    /// substitution alphabet, the 11th becomes the delimiter. Repeated
    /// characters and distinct characters beyond the 11th are allowed and
    /// do not affect the derivation. The key is retained verbatim and
    /// readable through [`Transcoder::key`].
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key has fewer than 11 distinct characters
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        // Derive alphabet and delimiter (validates the key)
        let alphabet = Alphabet::derive(&key)?;

        info!(
            "Transcoder ready: {} substitution symbols derived from a {}-character key",
            ALPHABET_LEN,
            key.chars().count()
        );

        Ok(Self { key, alphabet })
    }

    /// Encode a string into delimiter-separated tokens.
    ///
    /// Each source character becomes one token: the decimal digits of its
    /// code point, each substituted with an alphabet symbol. The delimiter
    /// is placed between consecutive tokens, never before the first or
    /// after the last, so the output splits back into exactly one token
    /// per source character.
    ///
    /// Every call decodes its own output and compares it against the
    /// source before returning. The empty string has no token
    /// representation under this grammar and therefore fails that check.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A source character cannot be rendered through the substitution
    ///   scheme (`UnsupportedCharacter`)
    /// - The self-check cannot reproduce the source (`RoundTripValidation`)
    pub fn encode(&self, source: &str) -> Result<String> {
        trace!("Encoding {} characters", source.chars().count());

        let tokens = source
            .chars()
            .map(|ch| codec::encode_char(&self.alphabet, ch))
            .collect::<Result<Vec<_>>>()?;
        let encoded = tokens.join(&self.alphabet.delimiter().to_string());

        self.validate_round_trip(source, &encoded)?;

        Ok(encoded)
    }

    /// Decode a delimiter-separated token string back into its source.
    ///
    /// Splits on the delimiter, maps each token's symbols back to digits,
    /// and rebuilds one character per token. This reverses the generic
    /// substitution grammar only: decode has no way to tell whether its
    /// input came from a matching `encode` call, so foreign text that
    /// happens to parse decodes "successfully" into meaningless output.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A token contains a symbol outside the alphabet (`UnknownSymbol`)
    /// - A token is empty, including for empty input (`EmptyToken`)
    /// - A token's digits name no Unicode scalar value (`InvalidCodePoint`)
    pub fn decode(&self, encoded: &str) -> Result<String> {
        let mut decoded = String::new();
        for (index, token) in encoded.split(self.alphabet.delimiter()).enumerate() {
            decoded.push(codec::decode_token(&self.alphabet, token, index)?);
        }

        trace!("Decoded {} tokens", decoded.chars().count());
        Ok(decoded)
    }

    /// The key this transcoder was constructed from, verbatim.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The 10 substitution symbols, in digit order.
    pub fn alphabet(&self) -> &[char; ALPHABET_LEN] {
        self.alphabet.symbols()
    }

    /// The token delimiter.
    pub fn delimiter(&self) -> char {
        self.alphabet.delimiter()
    }

    /// Post-encode self-check: the output must decode back to the exact
    /// source. A failure here signals a derivation defect or unsupported
    /// input, distinct from the malformed-input errors `decode` reports.
    fn validate_round_trip(&self, source: &str, encoded: &str) -> Result<()> {
        match self.decode(encoded) {
            Ok(decoded) if decoded == source => Ok(()),
            _ => Err(TranscodeError::RoundTripValidation),
        }
    }
}
