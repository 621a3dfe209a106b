use crate::error::ConfigError;
use crate::{WORD_LENGTH, debug_log};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_WORDS_PATH: &str = "words.json";

#[derive(Deserialize)]
struct RawWordList {
    answers: Vec<String>,
    others: Vec<String>,
}

/// Answer words in puzzle order, plus the extra words accepted as guesses.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<String>,
    others: Vec<String>,
    accepted: HashSet<String>,
}

impl WordList {
    pub fn new(answers: Vec<String>, others: Vec<String>) -> Result<Self, ConfigError> {
        validate("answers", &answers)?;
        validate("others", &others)?;
        if answers.is_empty() {
            return Err(ConfigError::NoAnswers);
        }
        let accepted = answers.iter().chain(&others).cloned().collect();
        Ok(Self {
            answers,
            others,
            accepted,
        })
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn others(&self) -> &[String] {
        &self.others
    }

    pub fn accepts(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

fn validate(list: &'static str, words: &[String]) -> Result<(), ConfigError> {
    match words.iter().find(|w| !is_valid_word(w)) {
        Some(word) => Err(ConfigError::InvalidWord {
            list,
            word: word.clone(),
            expected: WORD_LENGTH,
        }),
        None => Ok(()),
    }
}

pub fn load_word_list_from_str(data: &str) -> Result<WordList, ConfigError> {
    let raw: RawWordList = serde_json::from_str(data)?;
    WordList::new(raw.answers, raw.others)
}

pub fn load_word_list_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let words = load_word_list_from_str(&data)?;
    debug_log!(
        "Loaded {} answers and {} other words from {}",
        words.answers().len(),
        words.others().len(),
        path.display()
    );
    Ok(words)
}
