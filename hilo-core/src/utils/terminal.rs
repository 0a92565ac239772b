//! # Terminal Input Helper
//!
//! This module provides the prompt-read-retry primitive for collecting a
//! guess from the player. It repeatedly prompts until a line passes
//! [`parse_guess`], printing the diagnostic for every malformed line.
//!
//! The reader and writer are generic, so the same loop runs against the
//! locked standard streams in a binary and against in-memory buffers in
//! tests. The malformed token is consumed together with its line, so one bad
//! token can never re-trigger the same error.
//!
//! ## Example
//! ```rust,no_run
//! use hilo_core::utils::Terminal;
//! use std::io;
//!
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! let guess = Terminal::ask(&mut stdin.lock(), &mut stdout.lock(), "Enter your guess: ").unwrap();
//!
//! println!("The input: {}", guess);
//! ```

use crate::utils::sanitize::parse_guess;
use std::io::{self, BufRead, Write};

/// A helper for repeatedly asking the player for input until it parses as a
/// whole number. Internally calls [`parse_guess`].
pub struct Terminal;

impl Terminal {
    /// Writes the prompt (no trailing newline) and loops until an accepted
    /// guess is read. Malformed lines print their diagnostic and are
    /// discarded before re-prompting.
    ///
    /// Errors only on the underlying streams: a failed write, a failed read,
    /// or an input that ends before a valid guess arrives
    /// ([`io::ErrorKind::UnexpectedEof`]).
    pub fn ask<R: BufRead, W: Write>(
        reader: &mut R,
        writer: &mut W,
        prompt: &str,
    ) -> io::Result<i32> {
        loop {
            write!(writer, "{}", prompt)?;
            writer.flush()?;

            let mut answer = String::new();
            if reader.read_line(&mut answer)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input stream closed before a valid guess",
                ));
            }

            match parse_guess(&answer) {
                Ok(guess) => break Ok(guess),
                Err(e) => {
                    writeln!(writer, "{}", e)?;
                    continue;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask_scripted(script: &str) -> (io::Result<i32>, String) {
        let mut reader = Cursor::new(script.as_bytes().to_vec());
        let mut writer = Vec::new();
        let res = Terminal::ask(&mut reader, &mut writer, "Enter your guess: ");
        (res, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn test_ask_returns_first_parseable_line() {
        let (res, output) = ask_scripted("  7 \n");
        assert_eq!(res.unwrap(), 7);
        assert_eq!(output, "Enter your guess: ");
    }

    #[test]
    fn test_ask_discards_malformed_lines_and_reprompts() {
        let (res, output) = ask_scripted("abc\n\n42\n");
        assert_eq!(res.unwrap(), 42);
        assert_eq!(
            output,
            "Enter your guess: Invalid input. Please enter a whole number.\n\
             Enter your guess: Invalid input. Please enter a whole number.\n\
             Enter your guess: "
        );
    }

    #[test]
    fn test_ask_errors_when_input_closes() {
        let (res, _) = ask_scripted("not a number\n");
        assert_eq!(res.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
