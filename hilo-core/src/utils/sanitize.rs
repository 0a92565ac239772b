//! # Input Sanitization & Validation
//!
//! This module validates raw lines of player input. A guess is accepted only
//! if the whole line, after trimming, is a machine integer; everything else —
//! empty lines, decimals, stray text, values too large for the game's integer
//! type — is rejected with a [`MalformedGuess`] carrying a friendly
//! diagnostic.
//!
//! Rejection is a value, not an unwind: callers decide per line whether to
//! retry, so a malformed token can never crash the game or leak past the
//! input layer.
//!
//! ## Example
//! ```rust
//! use hilo_core::utils::parse_guess;
//!
//! assert_eq!(parse_guess("42\n").unwrap(), 42);
//! assert_eq!(parse_guess("  -7  ").unwrap(), -7);
//! assert!(parse_guess("3.14").is_err());
//! ```

use std::{error::Error, fmt::Display};

/// Represents an error that occurs when an input line is not a whole number.
///
/// Keeps the rejected token (after trimming) so callers and tests can see
/// what was discarded.
#[derive(Debug, PartialEq, Eq)]
pub struct MalformedGuess {
    raw: String,
}

impl MalformedGuess {
    /// The rejected token, whitespace already stripped.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl Display for MalformedGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid input. Please enter a whole number.")
    }
}

impl Error for MalformedGuess {}

/// Validates one line of player input.
///
/// - Trims whitespace (including the trailing newline) before validation.
/// - Returns the parsed value if the line is a whole number.
/// - Returns a [`MalformedGuess`] holding the cleaned token otherwise.
pub fn parse_guess(answer: &str) -> Result<i32, MalformedGuess> {
    let clean_answer = answer.trim();

    match clean_answer.parse::<i32>() {
        Ok(guess) => Ok(guess),
        Err(_) => Err(MalformedGuess {
            raw: clean_answer.to_string(),
        }),
    }
}
