use daily_wordle::cli::{CliPresenter, parse_cli};
use daily_wordle::clipboard::{Clipboard, NoClipboard, SystemClipboard};
use daily_wordle::game_state::{GameSession, game_loop};
use daily_wordle::logging::init_logging;
use daily_wordle::puzzle::today;
use daily_wordle::wordbank::load_word_list_from_file;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let cli = parse_cli();

    let words = match load_word_list_from_file(&cli.words_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let date = cli.date.unwrap_or_else(today);
    let mut session = match GameSession::new(&words, date) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut clipboard: Box<dyn Clipboard> = if cli.no_clipboard {
        Box::new(NoClipboard)
    } else {
        Box::new(SystemClipboard)
    };
    let mut presenter = CliPresenter::new(io::stdin().lock(), io::stdout().lock());

    match game_loop(&mut session, &mut presenter, &mut *clipboard) {
        Ok(summary) => {
            log::info!(
                "Game over: puzzle={} solved={} attempts_used={}",
                summary.puzzle_index,
                summary.solved,
                summary.attempts_used
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
