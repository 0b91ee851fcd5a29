//! # keymask
//!
//! A reversible, keyword-parameterized text transcoder.
//! Derives a 10-symbol substitution alphabet and a delimiter from a key,
//! encodes each character of a string as the substituted decimal digits of
//! its code point, and reverses the transform exactly.
//!
//! **Note:** this is a structural transform, not a cipher. It provides no
//! confidentiality: token boundaries mirror the source character by
//! character, and nothing resists frequency or length analysis. Apply a
//! real cryptographic hash or cipher (bcrypt, scrypt, Argon2, AES) first
//! and use the transcoder only as an obfuscation layer on top of its
//! output.
//!
//! ```
//! use keymask::Transcoder;
//!
//! // Any key with at least 11 distinct characters works.
//! let transcoder = Transcoder::new("workbench+134").unwrap();
//!
//! let masked = transcoder.encode("s3cr3t-digest").unwrap();
//! assert_eq!(transcoder.decode(&masked).unwrap(), "s3cr3t-digest");
//! ```

pub mod transcoder;

// Re-export the main types for convenience
pub use transcoder::{Result, TranscodeError, Transcoder};
