//! Read-evaluate-print loop driving a [`GameSession`] until the secret number
//! is guessed.

use crate::game::session::{GameSession, GuessOutcome};
use crate::utils::terminal::Terminal;
use std::io::{self, BufRead, Write};

/// Owns the input and output streams for one game and plays a
/// [`GameSession`] through to the winning guess.
///
/// The streams are generic: the CLI hands in locked stdin/stdout, tests hand
/// in in-memory buffers. Both are released when the loop is dropped,
/// whichever way [`InteractionLoop::run`] exits.
pub struct InteractionLoop<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InteractionLoop<R, W> {
    pub fn new(reader: R, writer: W) -> InteractionLoop<R, W> {
        InteractionLoop { reader, writer }
    }

    /// Plays the session to completion.
    ///
    /// Prints the welcome and bounds lines, then cycles: prompt, parse, route
    /// the guess to [`GameSession::evaluate`], answer with one feedback line.
    /// Malformed lines are recovered inside [`Terminal::ask`] and never reach
    /// the session; well-formed but out-of-range guesses do, and cost an
    /// attempt. The only error exit is a failed or exhausted input stream.
    pub fn run(&mut self, session: &mut GameSession) -> io::Result<()> {
        writeln!(self.writer, "Welcome to the Number Guessing Game!")?;
        writeln!(
            self.writer,
            "I'm thinking of a number between {} and {}.",
            session.lower_bound(),
            session.upper_bound()
        )?;

        loop {
            let guess = Terminal::ask(&mut self.reader, &mut self.writer, "Enter your guess: ")?;

            match session.evaluate(guess) {
                GuessOutcome::OutOfRange => writeln!(
                    self.writer,
                    "Your guess is outside the valid range ({} - {}). Please try again.",
                    session.lower_bound(),
                    session.upper_bound()
                )?,
                GuessOutcome::TooLow => writeln!(self.writer, "Too low! Try again.")?,
                GuessOutcome::TooHigh => writeln!(self.writer, "Too high! Try again.")?,
                GuessOutcome::Correct => {
                    writeln!(
                        self.writer,
                        "Congratulations! You guessed the number {} in {} attempts.",
                        guess,
                        session.attempts_taken()
                    )?;
                    break Ok(());
                }
            }
        }
    }
}
