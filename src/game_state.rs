//! State of a single hangman game.

use crate::error::{ConfigError, HangmanError};
use crate::pattern::{render, word_len};
use crate::strategy::GoalStrategy;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;

/// Tracks the guessed letters, the remaining wrong-guess budget and the
/// words that could still be the answer.
///
/// The candidate set is established lazily, on the first call that needs it,
/// by the [`GoalStrategy`] the game was built with.
#[derive(Debug)]
pub struct GameState<S> {
    dictionary: Vec<String>,
    goal_length: usize,
    guess_limit: usize,
    guesses_left: usize,
    guessed: BTreeSet<char>,
    candidates: Option<BTreeSet<String>>,
    strategy: S,
}

impl<S: GoalStrategy> GameState<S> {
    /// # Errors
    ///
    /// Returns [`HangmanError::InvalidConfiguration`] if the dictionary is
    /// empty, `goal_length` or `guess_limit` is zero, or no dictionary word has
    /// `goal_length` characters.
    pub fn new(
        dictionary: Vec<String>,
        goal_length: usize,
        guess_limit: usize,
        strategy: S,
    ) -> Result<Self, HangmanError> {
        if dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary.into());
        }
        if goal_length < 1 {
            return Err(ConfigError::ZeroGoalLength.into());
        }
        if guess_limit < 1 {
            return Err(ConfigError::ZeroGuessLimit.into());
        }
        if !dictionary.iter().any(|word| word_len(word) == goal_length) {
            return Err(ConfigError::NoWordOfLength(goal_length).into());
        }

        info_log!(
            "GameState::new() - {} rules, {} words, length {}, {} wrong guesses",
            strategy.name(),
            dictionary.len(),
            goal_length,
            guess_limit
        );

        Ok(Self {
            dictionary,
            goal_length,
            guess_limit,
            guesses_left: guess_limit,
            guessed: BTreeSet::new(),
            candidates: None,
            strategy,
        })
    }

    /// The words that could still be the answer. Under normal rules this is
    /// the goal word alone.
    pub fn words(&mut self) -> &BTreeSet<String> {
        if self.candidates.is_none() {
            let pool: Vec<String> = self
                .dictionary
                .iter()
                .filter(|word| word_len(word) == self.goal_length)
                .cloned()
                .collect();
            let established = self.strategy.establish(pool);
            debug_log!("words() - established {} candidates", established.len());
            self.candidates = Some(established);
        }
        self.candidates.get_or_insert_with(BTreeSet::new)
    }

    #[must_use]
    pub fn wrong_guess_limit(&self) -> usize {
        self.guess_limit
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// Letters guessed so far, in alphabetical order.
    #[must_use]
    pub fn guesses(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn goal_length(&self) -> usize {
        self.goal_length
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The candidate that patterns and occurrence counts are computed against:
    /// the alphabetically first word in [`words`](Self::words).
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::NoGoalWord`] if there are no candidates.
    pub fn representative_word(&mut self) -> Result<&str, HangmanError> {
        self.words()
            .first()
            .map(String::as_str)
            .ok_or(HangmanError::NoGoalWord)
    }

    /// The board as shown to the player, e.g. `"h - l l -"`.
    ///
    /// # Errors
    ///
    /// Returns [`HangmanError::NoGoalWord`] if there are no candidates.
    pub fn pattern(&mut self) -> Result<String, HangmanError> {
        self.words();
        let word = self
            .candidates
            .as_ref()
            .and_then(BTreeSet::first)
            .ok_or(HangmanError::NoGoalWord)?;
        Ok(render(word, &self.guessed))
    }

    /// Records a guess and returns how many times the letter occurs in the
    /// representative word. A miss costs one wrong guess.
    ///
    /// Upper-case letters are folded to lower case.
    ///
    /// # Errors
    ///
    /// - [`HangmanError::GuessesExhausted`] if no wrong guesses remain
    /// - [`HangmanError::NoCandidates`] if the candidate set is empty
    /// - [`HangmanError::InvalidLetter`] if `letter` is not alphabetic
    /// - [`HangmanError::DuplicateGuess`] if the letter was already guessed
    pub fn record(&mut self, letter: char) -> Result<usize, HangmanError> {
        if self.guesses_left == 0 {
            return Err(HangmanError::GuessesExhausted);
        }
        if self.words().is_empty() {
            return Err(HangmanError::NoCandidates);
        }
        let letter = normalize(letter)?;
        if !self.guessed.insert(letter) {
            return Err(HangmanError::DuplicateGuess(letter));
        }

        let candidates = self.candidates.take().unwrap_or_default();
        let before = candidates.len();
        let narrowed = self.strategy.narrow(candidates, &self.guessed);
        debug_log!(
            "record('{}') - candidates {} -> {}",
            letter,
            before,
            narrowed.len()
        );
        debug_assert!(narrowed.len() <= before);
        self.candidates = Some(narrowed);

        let occurrences = self
            .candidates
            .as_ref()
            .and_then(BTreeSet::first)
            .map_or(0, |word| word.chars().filter(|&c| c == letter).count());

        if occurrences == 0 {
            self.guesses_left -= 1;
        }
        Ok(occurrences)
    }
}

fn normalize(letter: char) -> Result<char, HangmanError> {
    if !letter.is_alphabetic() {
        return Err(HangmanError::InvalidLetter(letter));
    }
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(HangmanError::InvalidLetter(letter)),
    }
}
