use crate::error::ConfigError;
use crate::info_log;
use crate::wordbank::WordList;
use chrono::{Local, NaiveDate};

/// Day zero of the puzzle sequence (2021-06-19).
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// Whole days between [`EPOCH`] and `date`. Negative before the epoch.
#[must_use]
pub fn puzzle_index(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub index: usize,
    pub answer: String,
}

impl Puzzle {
    // No wraparound: a date past the answer list is a data problem.
    pub fn for_date(words: &WordList, date: NaiveDate) -> Result<Self, ConfigError> {
        let index = puzzle_index(date);
        let out_of_range = || ConfigError::PuzzleOutOfRange {
            date,
            index,
            available: words.answers().len(),
        };
        let slot = usize::try_from(index).map_err(|_| out_of_range())?;
        let answer = words.answers().get(slot).ok_or_else(out_of_range)?;
        info_log!("Puzzle {slot} selected for {date}");
        Ok(Self {
            index: slot,
            answer: answer.clone(),
        })
    }
}
