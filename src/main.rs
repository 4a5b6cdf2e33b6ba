use hangman::cli::{CliInterface, Cli, Mode, parse_cli};
use hangman::{AdversarialGoal, FixedGoal, GameState, GoalStrategy, HangmanError, Outcome};
use hangman::{game_loop, load_wordbank, logging};
use std::io;

fn play<S: GoalStrategy>(dictionary: Vec<String>, cli: &Cli, strategy: S) -> Result<Outcome, HangmanError> {
    let mut game = GameState::new(dictionary, cli.goal_length, cli.guess_limit, strategy)?;
    let mut interface = CliInterface::new(io::stdin().lock());
    game_loop(&mut game, &mut interface, cli.show_words)
}

fn main() {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let dictionary = match load_wordbank(cli.dictionary_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return;
        }
    };
    log::info!("Loaded {} words.", dictionary.len());

    let result = match cli.mode {
        Mode::Normal => {
            let strategy = match cli.seed {
                Some(seed) => FixedGoal::seeded(seed),
                None => FixedGoal::from_entropy(),
            };
            play(dictionary, &cli, strategy)
        }
        Mode::Devious => play(dictionary, &cli, AdversarialGoal),
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }
}
