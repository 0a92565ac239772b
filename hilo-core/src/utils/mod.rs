pub mod sanitize;
pub use sanitize::{MalformedGuess, parse_guess};

pub mod terminal;
pub use terminal::Terminal;
