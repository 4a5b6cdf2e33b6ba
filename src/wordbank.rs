use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    (!word.is_empty()).then(|| word.to_lowercase())
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Where a user's own dictionary lives, if the platform has a data directory.
pub fn get_default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("hangman").join("dictionary.txt"))
}

/// Resolves the dictionary: an explicit path, else the user's dictionary if
/// one exists, else the embedded word list.
pub fn load_wordbank(path: Option<&Path>) -> io::Result<Vec<String>> {
    if let Some(path) = path {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = get_default_wordbank_path()
        && path.is_file()
    {
        return load_wordbank_from_file(path);
    }
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}
