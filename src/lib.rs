// Library interface for daily-wordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod puzzle;
pub mod wordbank;

/// Letters in every word.
pub const WORD_LENGTH: usize = 5;
/// Scored guesses allowed per game.
pub const MAX_ATTEMPTS: usize = 6;

// Re-export commonly used items for easier testing
pub use clipboard::{Clipboard, NoClipboard, SystemClipboard};
pub use error::{ConfigError, GuessError};
pub use feedback::{Mark, score_guess};
pub use game_state::{GameSession, GameSummary, Presenter, Round, game_loop};
pub use puzzle::{EPOCH, Puzzle, puzzle_index};
pub use wordbank::{WordList, load_word_list_from_file, load_word_list_from_str};
