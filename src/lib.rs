// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod logging;
pub mod pattern;
pub mod strategy;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{ConfigError, ErrorCategory, HangmanError};
pub use game_loop::{GameInterface, Outcome, Status, UserAction, game_loop};
pub use game_state::GameState;
pub use strategy::{AdversarialGoal, FixedGoal, GoalStrategy};
pub use wordbank::{load_wordbank, load_wordbank_from_file, load_wordbank_from_str};
