use std::collections::BTreeSet;

/// Shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '-';

/// Builds the hangman display for `word`: one token per letter, the letter
/// itself when guessed and [`PLACEHOLDER`] otherwise, separated by single spaces.
#[must_use]
pub fn render(word: &str, guesses: &BTreeSet<char>) -> String {
    let mut pattern = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            pattern.push(' ');
        }
        pattern.push(if guesses.contains(&c) { c } else { PLACEHOLDER });
    }
    pattern
}

/// True once every letter of `word` has been guessed.
#[must_use]
pub fn is_revealed(word: &str, guesses: &BTreeSet<char>) -> bool {
    word.chars().all(|c| guesses.contains(&c))
}

/// Word length in characters, which is what goal lengths are measured in.
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}
