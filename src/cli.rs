use crate::error::GuessError;
use crate::feedback::Mark;
use crate::game_state::{Presenter, Round};
use crate::wordbank::DEFAULT_WORDS_PATH;
use chrono::NaiveDate;
use clap::Parser;
use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::{fmt, io};

/// Daily Wordle in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON word list with "answers" and "others"
    #[arg(short = 'w', long = "words", default_value = DEFAULT_WORDS_PATH)]
    pub words_path: PathBuf,

    /// Play the puzzle for this date (YYYY-MM-DD) instead of today
    #[arg(short = 'd', long = "date")]
    pub date: Option<NaiveDate>,

    /// Do not copy the results to the clipboard
    #[arg(long = "no-clipboard")]
    pub no_clipboard: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Uppercased guess letters coloured by their marks.
pub struct ColoredGuess<'a>(pub &'a Round);

impl fmt::Display for ColoredGuess<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ch, mark) in self.0.guess.chars().zip(&self.0.marks) {
            let ch = ch.to_ascii_uppercase();
            match mark {
                Mark::Exact => write!(f, "{}", ch.green())?,
                Mark::Present => write!(f, "{}", ch.yellow())?,
                Mark::Absent => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}

/// Terminal presenter: reads guesses line by line and writes plain text.
pub struct CliPresenter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliPresenter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Presenter for CliPresenter<R, W> {
    fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.writer.flush()?;
        // Invalid UTF-8 is replaced so the line is rejected as a guess
        // instead of ending the game.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show_intro(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()> {
        writeln!(
            self.writer,
            "This is Wordle. Enter the correct {word_length} letter word. You have {max_attempts} tries"
        )
    }

    fn show_rejection(&mut self, error: &GuessError) -> io::Result<()> {
        match error {
            GuessError::WrongLength { expected, .. } => writeln!(
                self.writer,
                "Your word has to be {expected} letters. Guess again"
            ),
            GuessError::NotInWordList { .. } => {
                writeln!(self.writer, "Not a valid word. Guess again")
            }
        }
    }

    fn show_feedback(&mut self, round: &Round) -> io::Result<()> {
        writeln!(self.writer, "===> {}", ColoredGuess(round))
    }

    fn show_remaining(&mut self, attempts_remaining: usize) -> io::Result<()> {
        writeln!(self.writer, "{attempts_remaining} tries left. Guess again")
    }

    fn show_outcome(&mut self, solved: bool) -> io::Result<()> {
        if solved {
            writeln!(self.writer, "You did it!")
        } else {
            writeln!(self.writer, "Out of tries. Better luck tomorrow")
        }
    }

    fn show_share_text(&mut self, share_text: &str, copied: bool) -> io::Result<()> {
        if copied {
            writeln!(
                self.writer,
                "\nYour shareable results have been copied to the clipboard"
            )?;
        } else {
            writeln!(self.writer, "\nYour shareable results")?;
        }
        write!(self.writer, "{share_text}")?;
        self.writer.flush()
    }
}
