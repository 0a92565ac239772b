//! # Game Session
//!
//! This module holds the state machine for one guess-the-number game: the
//! secret number, the inclusive bounds it was drawn from, and the attempt
//! counter. The session is the only owner of the secret — it is drawn once at
//! construction and never exposed, so callers only learn about it through
//! [`GuessOutcome`] values.
//!
//! ## Example
//! ```rust
//! use hilo_core::game::{GameSession, GuessOutcome};
//!
//! let mut session = GameSession::new(1, 100).unwrap();
//! match session.evaluate(50) {
//!     GuessOutcome::Correct => println!("First try!"),
//!     other => println!("{:?} after {} attempt(s)", other, session.attempts_taken()),
//! }
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cmp::Ordering;
use std::{error::Error, fmt::Display};

/// Lower bound used by frontends that don't take a range from the player.
pub const DEFAULT_LOWER_BOUND: i32 = 1;
/// Upper bound used by frontends that don't take a range from the player.
pub const DEFAULT_UPPER_BOUND: i32 = 100;

/// Classification of a single guess against the bounds and the secret.
///
/// Every guess produces exactly one outcome; [`GuessOutcome::Correct`] is the
/// terminal one, everything else loops the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    OutOfRange,
    TooLow,
    TooHigh,
    Correct,
}

/// Represents an error that occurs when a session cannot be constructed.
///
/// - `InvalidBounds`: the lower bound was not strictly below the upper bound,
///   so there is no interval to draw a secret from.
#[derive(Debug, PartialEq, Eq)]
pub enum GameSessionErrors {
    InvalidBounds(i32, i32),
}

impl Display for GameSessionErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBounds(lower, upper) => write!(
                f,
                "Invalid bounds => lower bound must be less than upper bound ({} >= {})",
                lower, upper
            ),
        }
    }
}

impl Error for GameSessionErrors {}

/// One game of guess-the-number.
///
/// The secret and bounds are fixed at construction; only the attempt counter
/// moves afterwards, by exactly one per [`GameSession::evaluate`] call.
pub struct GameSession {
    secret_number: i32,
    lower_bound: i32,
    upper_bound: i32,
    attempts: u32,
}

impl GameSession {
    /// Creates a session with a secret drawn uniformly from
    /// `[lower_bound, upper_bound]` using OS entropy.
    ///
    /// Fails with [`GameSessionErrors::InvalidBounds`] when
    /// `lower_bound >= upper_bound`; no secret is drawn on that path.
    pub fn new(lower_bound: i32, upper_bound: i32) -> Result<GameSession, GameSessionErrors> {
        let mut thread_rng = rand::rng();
        let mut rng = SmallRng::from_rng(&mut thread_rng);

        Self::with_rng(lower_bound, upper_bound, &mut rng)
    }

    /// Same as [`GameSession::new`] but draws the secret from a
    /// caller-supplied rng. A seeded rng makes the session reproducible.
    pub fn with_rng<R: Rng>(
        lower_bound: i32,
        upper_bound: i32,
        rng: &mut R,
    ) -> Result<GameSession, GameSessionErrors> {
        if lower_bound >= upper_bound {
            return Err(GameSessionErrors::InvalidBounds(lower_bound, upper_bound));
        }

        Ok(GameSession {
            secret_number: rng.random_range(lower_bound..=upper_bound),
            lower_bound,
            upper_bound,
            attempts: 0,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_secret(lower_bound: i32, upper_bound: i32, secret_number: i32) -> GameSession {
        assert!(lower_bound < upper_bound);
        assert!(secret_number >= lower_bound && secret_number <= upper_bound);

        GameSession {
            secret_number,
            lower_bound,
            upper_bound,
            attempts: 0,
        }
    }

    /// Classifies one guess. Total over all `i32` values: nothing here
    /// panics or errors, out-of-range guesses are a normal outcome.
    ///
    /// The counter moves before the range check, so a well-formed guess
    /// outside the bounds still costs an attempt.
    pub fn evaluate(&mut self, guess: i32) -> GuessOutcome {
        self.attempts += 1;

        if guess < self.lower_bound || guess > self.upper_bound {
            return GuessOutcome::OutOfRange;
        }

        match guess.cmp(&self.secret_number) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => GuessOutcome::Correct,
        }
    }

    /// Number of [`GameSession::evaluate`] calls so far.
    pub fn attempts_taken(&self) -> u32 {
        self.attempts
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let res = GameSession::new(100, 1);
        assert_eq!(res.err(), Some(GameSessionErrors::InvalidBounds(100, 1)));
    }

    #[test]
    fn test_new_rejects_equal_bounds() {
        let res = GameSession::new(10, 10);
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "Invalid bounds => lower bound must be less than upper bound (10 >= 10)"
            );
        }
    }

    #[test]
    fn test_secret_is_drawn_within_bounds() {
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let session = GameSession::with_rng(1, 100, &mut rng).unwrap();
            assert!(session.secret_number >= 1 && session.secret_number <= 100);
        }
    }

    #[test]
    fn test_new_draws_within_bounds() {
        for _ in 0..32 {
            let session = GameSession::new(-5, 5).unwrap();
            assert!(session.secret_number >= -5 && session.secret_number <= 5);
            assert_eq!(session.attempts_taken(), 0);
        }
    }

    #[test]
    fn test_guess_high_then_correct() {
        let mut session = GameSession::with_secret(1, 100, 42);

        assert_eq!(session.evaluate(50), GuessOutcome::TooHigh);
        assert_eq!(session.attempts_taken(), 1);
        assert_eq!(session.evaluate(42), GuessOutcome::Correct);
        assert_eq!(session.attempts_taken(), 2);
    }

    #[test]
    fn test_guess_low() {
        let mut session = GameSession::with_secret(1, 100, 42);
        assert_eq!(session.evaluate(13), GuessOutcome::TooLow);
    }

    #[test]
    fn test_out_of_range_guess_still_costs_an_attempt() {
        let mut session = GameSession::with_secret(1, 10, 5);

        assert_eq!(session.evaluate(0), GuessOutcome::OutOfRange);
        assert_eq!(session.attempts_taken(), 1);
    }

    #[test]
    fn test_out_of_range_on_both_sides() {
        let mut session = GameSession::with_secret(1, 10, 5);

        assert_eq!(session.evaluate(11), GuessOutcome::OutOfRange);
        assert_eq!(session.evaluate(i32::MIN), GuessOutcome::OutOfRange);
        assert_eq!(session.evaluate(i32::MAX), GuessOutcome::OutOfRange);
    }

    #[test]
    fn test_attempts_match_evaluate_calls() {
        let mut session = GameSession::with_secret(1, 100, 42);

        for (calls, guess) in [7, -3, 200, 42, 42].into_iter().enumerate() {
            session.evaluate(guess);
            assert_eq!(session.attempts_taken(), calls as u32 + 1);
        }
    }

    #[test]
    fn test_bound_accessors() {
        let session = GameSession::with_secret(3, 9, 4);
        assert_eq!(session.lower_bound(), 3);
        assert_eq!(session.upper_bound(), 9);
    }

    proptest! {
        #[test]
        fn evaluate_is_total_over_i32(guess in any::<i32>()) {
            let mut session = GameSession::with_secret(-50, 50, 7);
            let outcome = session.evaluate(guess);

            let expected = if !(-50..=50).contains(&guess) {
                GuessOutcome::OutOfRange
            } else {
                match guess.cmp(&7) {
                    Ordering::Less => GuessOutcome::TooLow,
                    Ordering::Greater => GuessOutcome::TooHigh,
                    Ordering::Equal => GuessOutcome::Correct,
                }
            };

            prop_assert_eq!(outcome, expected);
            prop_assert_eq!(session.attempts_taken(), 1);
        }

        #[test]
        fn construction_validates_bounds(lower in any::<i32>(), upper in any::<i32>()) {
            let mut rng = SmallRng::seed_from_u64(0);
            let res = GameSession::with_rng(lower, upper, &mut rng);

            if lower >= upper {
                prop_assert_eq!(res.err(), Some(GameSessionErrors::InvalidBounds(lower, upper)));
            } else {
                let session = res.unwrap();
                prop_assert!(session.secret_number >= lower && session.secret_number <= upper);
            }
        }
    }
}
