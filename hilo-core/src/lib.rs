//! # Hilo
//!
//! A Rust library for building interactive CLI guessing games with robust input
//! validation and terminal interaction.
//!
//! ## Features
//!
//! - **Game Session** - A self-contained guess-the-number state machine with
//!   bounded uniform secret generation and an attempt counter
//! - **Input Sanitization & Validation** - Whole-number validation for raw
//!   input lines with a friendly, recoverable diagnostic
//! - **Interactive Terminal Interface** - User-friendly CLI prompting with
//!   validation loops over any `BufRead`/`Write` pair
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hilo-core = "0.1"
//! ```
//!
//! ## Usage Examples
//!
//! ### Complete Interactive Game
//!
//! ```rust,no_run
//! use hilo_core::game::{GameSession, InteractionLoop};
//! use hilo_core::game::session::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
//! use std::io;
//!
//! let mut session = GameSession::new(DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND).unwrap();
//!
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! let mut game = InteractionLoop::new(stdin.lock(), stdout.lock());
//!
//! game.run(&mut session).unwrap();
//! ```
//!
//! ### Evaluating Guesses Directly
//!
//! Sessions can be driven without a terminal, e.g. from a test or another
//! frontend. A caller-supplied rng makes the secret reproducible:
//!
//! ```rust
//! use hilo_core::game::{GameSession, GuessOutcome};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut session = GameSession::with_rng(1, 100, &mut rng).unwrap();
//!
//! // A well-formed guess outside the bounds is still an attempt.
//! assert_eq!(session.evaluate(0), GuessOutcome::OutOfRange);
//! assert_eq!(session.attempts_taken(), 1);
//! ```
//!
//! ### Validating Raw Input Lines
//!
//! ```rust
//! use hilo_core::utils::parse_guess;
//!
//! assert_eq!(parse_guess(" 42 \n").unwrap(), 42);
//! assert!(parse_guess("forty-two").is_err());
//! ```
//!
//! ## Architecture
//!
//! The library is designed with modularity and composability in mind:
//!
//! - **`game`** - The session state machine and the read-evaluate-print loop
//! - **`utils`** - Input sanitization and terminal prompting helpers
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, E>` types for safe error handling:
//!
//! ```rust
//! use hilo_core::game::{GameSession, GameSessionErrors};
//!
//! match GameSession::new(10, 10) {
//!     Ok(_) => unreachable!("equal bounds leave no number to guess"),
//!     Err(GameSessionErrors::InvalidBounds(lower, upper)) => {
//!         assert_eq!((lower, upper), (10, 10));
//!     }
//! }
//! ```

pub mod game;

pub mod utils;
