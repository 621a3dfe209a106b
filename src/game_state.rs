use crate::clipboard::Clipboard;
use crate::error::{ConfigError, GuessError};
use crate::feedback::{Mark, is_solved, score_guess, transcript_line};
use crate::puzzle::Puzzle;
use crate::wordbank::WordList;
use crate::{MAX_ATTEMPTS, WORD_LENGTH, debug_log};
use chrono::NaiveDate;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: String,
    pub marks: Vec<Mark>,
    pub solved: bool,
    pub attempts_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub solved: bool,
    pub attempts_used: usize,
    pub puzzle_index: usize,
    pub share_text: String,
}

pub trait Presenter {
    /// Next raw input line, or `None` at end of input.
    fn read_guess(&mut self) -> io::Result<Option<String>>;
    fn show_intro(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()>;
    fn show_rejection(&mut self, error: &GuessError) -> io::Result<()>;
    fn show_feedback(&mut self, round: &Round) -> io::Result<()>;
    fn show_remaining(&mut self, attempts_remaining: usize) -> io::Result<()>;
    fn show_outcome(&mut self, solved: bool) -> io::Result<()>;
    fn show_share_text(&mut self, share_text: &str, copied: bool) -> io::Result<()>;
}

#[derive(Debug)]
pub struct GameSession<'a> {
    words: &'a WordList,
    answer: String,
    puzzle_index: usize,
    attempts_used: usize,
    solved: bool,
    transcript: String,
}

#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl<'a> GameSession<'a> {
    pub fn new(words: &'a WordList, date: NaiveDate) -> Result<Self, ConfigError> {
        let puzzle = Puzzle::for_date(words, date)?;
        Ok(Self::with_puzzle(words, puzzle))
    }

    pub fn with_puzzle(words: &'a WordList, puzzle: Puzzle) -> Self {
        Self {
            words,
            answer: puzzle.answer,
            puzzle_index: puzzle.index,
            attempts_used: 0,
            solved: false,
            transcript: String::new(),
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_over(&self) -> bool {
        self.solved || self.attempts_used >= MAX_ATTEMPTS
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    // The winning guess does not count as a used attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Round, GuessError> {
        debug_assert!(!self.is_over(), "guess submitted after the game ended");
        let guess = normalize_guess(raw);

        let length = guess.chars().count();
        if length != WORD_LENGTH {
            return Err(GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual: length,
            });
        }
        if !self.words.accepts(&guess) {
            return Err(GuessError::NotInWordList { word: guess });
        }

        let marks = score_guess(&guess, &self.answer);
        self.transcript.push_str(&transcript_line(&marks));
        self.transcript.push('\n');

        let solved = is_solved(&marks);
        if solved {
            self.solved = true;
        } else {
            self.attempts_used += 1;
        }
        debug_log!(
            "Round scored: guess={guess} solved={solved} attempts_used={}",
            self.attempts_used
        );

        Ok(Round {
            guess,
            marks,
            solved,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    pub fn score(&self) -> Option<usize> {
        self.solved.then_some(self.attempts_used + 1)
    }

    pub fn share_text(&self) -> String {
        let score = match self.score() {
            Some(round) => round.to_string(),
            None => "X".to_string(),
        };
        format!(
            "Wordle {} {}/{}\n\n{}",
            self.puzzle_index, score, MAX_ATTEMPTS, self.transcript
        )
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            solved: self.solved,
            attempts_used: self.attempts_used,
            puzzle_index: self.puzzle_index,
            share_text: self.share_text(),
        }
    }
}

pub fn game_loop<P, C>(
    session: &mut GameSession<'_>,
    presenter: &mut P,
    clipboard: &mut C,
) -> io::Result<GameSummary>
where
    P: Presenter + ?Sized,
    C: Clipboard + ?Sized,
{
    presenter.show_intro(WORD_LENGTH, MAX_ATTEMPTS)?;

    while !session.is_over() {
        let Some(line) = presenter.read_guess()? else {
            debug_log!("End of input after {} attempts", session.attempts_used());
            break;
        };

        match session.submit_guess(&line) {
            Ok(round) => {
                presenter.show_feedback(&round)?;
                if !round.solved {
                    presenter.show_remaining(round.attempts_remaining)?;
                }
            }
            Err(err) => presenter.show_rejection(&err)?,
        }
    }

    presenter.show_outcome(session.is_solved())?;

    let summary = session.summary();
    let copied = clipboard.copy(&summary.share_text);
    presenter.show_share_text(&summary.share_text, copied)?;
    Ok(summary)
}
