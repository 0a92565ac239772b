pub mod interaction;
pub use interaction::InteractionLoop;

pub mod session;
pub use session::{GameSession, GameSessionErrors, GuessOutcome};
