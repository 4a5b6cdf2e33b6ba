use crate::error::{ErrorCategory, HangmanError};
use crate::game_state::GameState;
use crate::info_log;
use crate::pattern::is_revealed;
use crate::strategy::GoalStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Exit,
}

/// What the player sees before each guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub pattern: String,
    pub guesses_left: usize,
    pub guesses: String,
    /// Only filled in when candidate counts were asked for.
    pub candidates: Option<usize>,
}

/// Trait abstracting the UI so the same loop can drive any front end
pub trait GameInterface {
    /// `None` means the input was unusable and the player should be asked again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_status(&mut self, status: &Status);
    fn display_guess_result(&mut self, letter: char, occurrences: usize);
    fn display_error(&mut self, error: &HangmanError);
    fn display_outcome(&mut self, outcome: Outcome, answer: &str);
    fn display_exit_message(&mut self);
}

/// Won once the representative word is fully revealed, lost once the
/// wrong-guess budget is spent.
///
/// # Errors
///
/// Returns [`HangmanError::NoGoalWord`] if there are no candidates.
pub fn check_outcome<S: GoalStrategy>(game: &mut GameState<S>) -> Result<Outcome, HangmanError> {
    let word = game.representative_word()?.to_owned();
    if is_revealed(&word, game.guesses()) {
        Ok(Outcome::Won)
    } else if game.guesses_left() == 0 {
        Ok(Outcome::Lost)
    } else {
        Ok(Outcome::InProgress)
    }
}

/// Snapshot of the board for display.
///
/// # Errors
///
/// Returns [`HangmanError::NoGoalWord`] if there are no candidates.
pub fn status<S: GoalStrategy>(
    game: &mut GameState<S>,
    show_words: bool,
) -> Result<Status, HangmanError> {
    Ok(Status {
        pattern: game.pattern()?,
        guesses_left: game.guesses_left(),
        guesses: game.guesses().iter().collect(),
        candidates: show_words.then(|| game.words().len()),
    })
}

/// Plays until the game is decided or the player exits. Argument errors
/// (a repeated or non-letter guess) are shown and the player is asked again;
/// anything else ends the loop.
///
/// # Errors
///
/// Returns any state error raised by the game.
pub fn game_loop<S: GoalStrategy, I: GameInterface>(
    game: &mut GameState<S>,
    interface: &mut I,
    show_words: bool,
) -> Result<Outcome, HangmanError> {
    loop {
        let outcome = check_outcome(game)?;
        if outcome != Outcome::InProgress {
            info_log!("game_loop() - finished: {:?}", outcome);
            let answer = game.representative_word()?.to_owned();
            interface.display_outcome(outcome, &answer);
            return Ok(outcome);
        }

        interface.display_status(&status(game, show_words)?);

        let letter = match interface.read_guess() {
            Some(UserAction::Guess(letter)) => letter,
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                return Ok(Outcome::InProgress);
            }
            None => continue,
        };

        match game.record(letter) {
            Ok(occurrences) => interface.display_guess_result(letter, occurrences),
            Err(e) if e.category() == ErrorCategory::Argument => interface.display_error(&e),
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{AdversarialGoal, FixedGoal};
    use std::collections::VecDeque;

    /// Replays canned actions and remembers what was shown.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        statuses: Vec<Status>,
        results: Vec<(char, usize)>,
        errors: Vec<HangmanError>,
        outcome: Option<(Outcome, String)>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn guessing(letters: &str) -> Self {
            Self {
                actions: letters.chars().map(|c| Some(UserAction::Guess(c))).collect(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_guess(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_status(&mut self, status: &Status) {
            self.statuses.push(status.clone());
        }

        fn display_guess_result(&mut self, letter: char, occurrences: usize) {
            self.results.push((letter, occurrences));
        }

        fn display_error(&mut self, error: &HangmanError) {
            self.errors.push(error.clone());
        }

        fn display_outcome(&mut self, outcome: Outcome, answer: &str) {
            self.outcome = Some((outcome, answer.to_string()));
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn hello_game(limit: usize) -> GameState<FixedGoal<rand::rngs::StdRng>> {
        GameState::new(vec!["hello".to_string()], 5, limit, FixedGoal::seeded(1)).unwrap()
    }

    #[test]
    fn test_game_loop_win() {
        let mut game = hello_game(7);
        let mut ui = ScriptedInterface::guessing("hzelo");
        let outcome = game_loop(&mut game, &mut ui, false).unwrap();

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(ui.outcome, Some((Outcome::Won, "hello".to_string())));
        assert_eq!(ui.results, vec![('h', 1), ('z', 0), ('e', 1), ('l', 2), ('o', 1)]);
        assert_eq!(ui.statuses[0].pattern, "- - - - -");
        assert_eq!(ui.statuses[0].guesses_left, 7);
        assert_eq!(ui.statuses.last().unwrap().guesses, "ehlz");
        assert!(ui.statuses.iter().all(|s| s.candidates.is_none()));
        assert!(!ui.exited);
    }

    #[test]
    fn test_game_loop_loss() {
        let mut game = hello_game(2);
        let mut ui = ScriptedInterface::guessing("abh");
        let outcome = game_loop(&mut game, &mut ui, false).unwrap();

        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(ui.results, vec![('a', 0), ('b', 0)]);
        assert_eq!(ui.outcome, Some((Outcome::Lost, "hello".to_string())));
    }

    #[test]
    fn test_game_loop_exit() {
        let mut game = hello_game(7);
        let mut ui = ScriptedInterface::guessing("h");
        let outcome = game_loop(&mut game, &mut ui, false).unwrap();

        assert_eq!(outcome, Outcome::InProgress);
        assert!(ui.exited);
        assert!(ui.outcome.is_none());
    }

    #[test]
    fn test_game_loop_reports_argument_errors() {
        let mut game = hello_game(7);
        let mut ui = ScriptedInterface::guessing("hh3");
        game_loop(&mut game, &mut ui, false).unwrap();

        assert_eq!(
            ui.errors,
            vec![HangmanError::DuplicateGuess('h'), HangmanError::InvalidLetter('3')]
        );
        assert_eq!(game.guesses_left(), 7);
    }

    #[test]
    fn test_game_loop_skips_invalid_input() {
        let mut game = hello_game(7);
        let mut ui = ScriptedInterface {
            actions: VecDeque::from([None, Some(UserAction::Guess('e')), None]),
            ..ScriptedInterface::default()
        };
        game_loop(&mut game, &mut ui, false).unwrap();

        assert_eq!(ui.results, vec![('e', 1)]);
        assert_eq!(ui.statuses.len(), 4);
        assert!(ui.exited);
    }

    #[test]
    fn test_game_loop_shows_candidate_counts() {
        let words = ["bat", "cat", "hat", "tab"].iter().map(|w| w.to_string()).collect();
        let mut game = GameState::new(words, 3, 7, AdversarialGoal).unwrap();
        let mut ui = ScriptedInterface::guessing("at");
        game_loop(&mut game, &mut ui, true).unwrap();

        let counts: Vec<Option<usize>> = ui.statuses.iter().map(|s| s.candidates).collect();
        assert_eq!(counts, vec![Some(4), Some(4), Some(3)]);
    }

    #[test]
    fn test_check_outcome() {
        let mut game = hello_game(1);
        assert_eq!(check_outcome(&mut game).unwrap(), Outcome::InProgress);
        game.record('x').unwrap();
        assert_eq!(check_outcome(&mut game).unwrap(), Outcome::Lost);

        let mut game = GameState::new(vec!["a".to_string()], 1, 1, FixedGoal::seeded(2)).unwrap();
        game.record('a').unwrap();
        assert_eq!(check_outcome(&mut game).unwrap(), Outcome::Won);
    }
}
