use crate::error::HangmanError;
use crate::game_loop::{GameInterface, Outcome, Status, UserAction};
use clap::{Parser, ValueEnum};
use std::io::BufRead;
use std::path::PathBuf;

pub const DEFAULT_GOAL_LENGTH: usize = 5;
pub const DEFAULT_GUESS_LIMIT: usize = 7;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The goal word is picked at the start and never changes
    Normal,
    /// The goal word is never picked; every guess is answered as unhelpfully as possible
    Devious,
}

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Length of the goal word
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_GOAL_LENGTH)]
    pub goal_length: usize,

    /// Number of wrong guesses allowed
    #[arg(short = 'g', long = "guesses", default_value_t = DEFAULT_GUESS_LIMIT)]
    pub guess_limit: usize,

    #[arg(short, long, value_enum, default_value_t = Mode::Normal)]
    pub mode: Mode,

    /// Seed for picking the goal word
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show how many candidate words remain
    #[arg(long)]
    pub show_words: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub enum GuessInput {
    Valid(char),
    Invalid,
    Exit,
}

fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c.to_lowercase().next(),
        _ => None,
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nEnter a letter (or 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return GuessInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim();

    if input.eq_ignore_ascii_case("exit") {
        return GuessInput::Exit;
    }
    match parse_letter(input) {
        Some(letter) => GuessInput::Valid(letter),
        None => {
            println!("Invalid guess. Please enter a single letter.");
            GuessInput::Invalid
        }
    }
}

pub fn display_status(status: &Status) {
    println!("\n{}", status.pattern);
    println!("Guesses left: {}", status.guesses_left);
    if !status.guesses.is_empty() {
        let guessed: Vec<String> = status.guesses.chars().map(String::from).collect();
        println!("Guessed: {}", guessed.join(" "));
    }
    if let Some(count) = status.candidates {
        println!("Candidate words: {count}");
    }
}

pub fn display_guess_result(letter: char, occurrences: usize) {
    match occurrences {
        0 => println!("Sorry, there are no {letter}'s."),
        1 => println!("Yes, there is one {letter}."),
        n => println!("Yes, there are {n} {letter}'s."),
    }
}

pub fn display_error(error: &HangmanError) {
    println!("{error}");
}

pub fn display_outcome(outcome: Outcome, answer: &str) {
    match outcome {
        Outcome::Won => println!("\nYou win! The word was {answer}."),
        Outcome::Lost => println!("\nYou lose. The word was {answer}."),
        Outcome::InProgress => {}
    }
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(letter) => Some(UserAction::Guess(letter)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::Invalid => None,
        }
    }

    fn display_status(&mut self, status: &Status) {
        display_status(status);
    }

    fn display_guess_result(&mut self, letter: char, occurrences: usize) {
        display_guess_result(letter, occurrences);
    }

    fn display_error(&mut self, error: &HangmanError) {
        display_error(error);
    }

    fn display_outcome(&mut self, outcome: Outcome, answer: &str) {
        display_outcome(outcome, answer);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
