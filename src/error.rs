use thiserror::Error;

/// The errors a game of hangman can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HangmanError {
    #[error("invalid game configuration: {kind}")]
    InvalidConfiguration {
        #[from]
        kind: ConfigError,
    },

    /// A guess was made after the wrong-guess budget ran out.
    #[error("there are zero guesses remaining")]
    GuessesExhausted,

    /// A guess was made while the candidate word set is empty.
    #[error("the candidate word set is empty")]
    NoCandidates,

    /// The display pattern was requested while there is no word to show.
    #[error("there is no goal word to display")]
    NoGoalWord,

    #[error("the letter {0} has already been guessed")]
    DuplicateGuess(char),

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
}

/// Reasons [`GameState::new`](crate::game_state::GameState::new) rejects its arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dictionary must not be empty")]
    EmptyDictionary,

    #[error("goal length must be greater than zero")]
    ZeroGoalLength,

    #[error("wrong guess limit must be greater than or equal to one")]
    ZeroGuessLimit,

    #[error("no word in the dictionary has length {0}")]
    NoWordOfLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad constructor arguments. Fatal.
    Configuration,
    /// The game cannot accept another guess.
    State,
    /// The guess itself was unusable; the caller may pick another letter.
    Argument,
}

impl HangmanError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration { .. } => ErrorCategory::Configuration,
            Self::GuessesExhausted | Self::NoCandidates | Self::NoGoalWord => ErrorCategory::State,
            Self::DuplicateGuess(_) | Self::InvalidLetter(_) => ErrorCategory::Argument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_guess_message() {
        let err = HangmanError::DuplicateGuess('a');
        assert_eq!(err.to_string(), "the letter a has already been guessed");
    }

    #[test]
    fn test_config_error_converts() {
        let err: HangmanError = ConfigError::NoWordOfLength(25).into();
        assert_eq!(
            err,
            HangmanError::InvalidConfiguration {
                kind: ConfigError::NoWordOfLength(25)
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid game configuration: no word in the dictionary has length 25"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            HangmanError::from(ConfigError::EmptyDictionary).category(),
            ErrorCategory::Configuration
        );
        assert_eq!(HangmanError::GuessesExhausted.category(), ErrorCategory::State);
        assert_eq!(HangmanError::NoCandidates.category(), ErrorCategory::State);
        assert_eq!(HangmanError::NoGoalWord.category(), ErrorCategory::State);
        assert_eq!(HangmanError::DuplicateGuess('e').category(), ErrorCategory::Argument);
        assert_eq!(HangmanError::InvalidLetter('3').category(), ErrorCategory::Argument);
    }
}
