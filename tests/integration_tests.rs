// Integration tests for the daily-wordle application
// These tests drive full games through the public library API

use chrono::NaiveDate;
use daily_wordle::cli::CliPresenter;
use daily_wordle::*;
use std::io::Cursor;

const SAMPLE_JSON: &str = r#"{
    "answers": ["apple", "bravo", "chess"],
    "others": ["appld", "crane", "slate", "trace", "eerie", "there", "bumpy"]
}"#;

fn sample_words() -> WordList {
    load_word_list_from_str(SAMPLE_JSON).unwrap()
}

/// Plays a scripted game on `date` and returns the summary and printed output.
fn play(words: &WordList, date: NaiveDate, input: &str) -> (GameSummary, String) {
    let mut session = GameSession::new(words, date).unwrap();
    let mut presenter = CliPresenter::new(Cursor::new(input.to_string()), Vec::new());
    let summary = game_loop(&mut session, &mut presenter, &mut NoClipboard).unwrap();
    let output = String::from_utf8(presenter.into_writer()).unwrap();
    (summary, output)
}

#[test]
fn test_epoch_day_selects_first_answer() {
    let words = sample_words();
    let session = GameSession::new(&words, EPOCH).unwrap();
    assert_eq!(session.answer(), "apple");
    assert_eq!(session.puzzle_index(), 0);
}

#[test]
fn test_win_on_third_round() {
    let words = sample_words();
    let (summary, output) = play(&words, EPOCH, "crane\nappld\napple\n");

    assert!(summary.solved);
    assert!(output.contains("You did it!"));

    let mut lines = summary.share_text.lines();
    assert_eq!(lines.next(), Some("Wordle 0 3/6"));
    assert_eq!(lines.next(), Some(""));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.chars().count() == 5));
    assert_eq!(rows[1], "🟩🟩🟩🟩⬜");
    assert_eq!(rows[2], "🟩🟩🟩🟩🟩");
    assert!(output.ends_with(&summary.share_text));
}

#[test]
fn test_first_guess_win_scores_one() {
    let words = sample_words();
    let (summary, _) = play(&words, EPOCH, "APPLE\n");
    assert!(summary.solved);
    assert_eq!(summary.attempts_used, 0);
    assert!(summary.share_text.starts_with("Wordle 0 1/6\n\n🟩🟩🟩🟩🟩\n"));
}

#[test]
fn test_invalid_guesses_do_not_use_attempts() {
    let words = sample_words();
    let (summary, output) = play(&words, EPOCH, "appl\nzzzzz\n  Apple \n");

    assert!(summary.solved);
    assert_eq!(summary.attempts_used, 0);
    assert!(output.contains("Your word has to be 5 letters. Guess again"));
    assert!(output.contains("Not a valid word. Guess again"));
    assert!(summary.share_text.starts_with("Wordle 0 1/6"));
}

#[test]
fn test_exhausting_attempts() {
    let words = sample_words();
    let input = "crane\nslate\ntrace\nbravo\nchess\nbumpy\napple\n";
    let (summary, output) = play(&words, EPOCH, input);

    assert!(!summary.solved);
    assert_eq!(summary.attempts_used, MAX_ATTEMPTS);
    assert!(output.contains("Out of tries"));
    assert!(output.contains("1 tries left. Guess again"));
    assert!(output.contains("0 tries left. Guess again"));

    let mut lines = summary.share_text.lines();
    assert_eq!(lines.next(), Some("Wordle 0 X/6"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.count(), MAX_ATTEMPTS);
}

#[test]
fn test_end_of_input_ends_game() {
    let words = sample_words();
    let (summary, output) = play(&words, EPOCH, "crane\n");

    assert!(!summary.solved);
    assert_eq!(summary.attempts_used, 1);
    assert!(output.contains("Out of tries"));
    assert!(summary.share_text.starts_with("Wordle 0 X/6"));
}

#[test]
fn test_invalid_utf8_guess_is_rejected_not_fatal() {
    let words = sample_words();
    let mut session = GameSession::new(&words, EPOCH).unwrap();
    let input: &[u8] = b"\xff\xfe\xfd\xfc\xfb\napple\n";
    let mut presenter = CliPresenter::new(Cursor::new(input), Vec::new());
    let summary = game_loop(&mut session, &mut presenter, &mut NoClipboard).unwrap();

    assert!(summary.solved);
    assert_eq!(summary.attempts_used, 0);
    let output = String::from_utf8(presenter.into_writer()).unwrap();
    assert!(output.contains("Not a valid word. Guess again"));
    assert!(!output.contains("copied to the clipboard"));
    assert!(summary.share_text.starts_with("Wordle 0 1/6"));
}

#[test]
fn test_later_date_selects_later_answer() {
    let words = sample_words();
    let date = NaiveDate::from_ymd_opt(2021, 6, 21).unwrap();
    let (summary, _) = play(&words, date, "chess\n");
    assert!(summary.solved);
    assert_eq!(summary.puzzle_index, 2);
    assert!(summary.share_text.starts_with("Wordle 2 1/6"));
}

#[test]
fn test_date_past_answer_list_is_config_error() {
    let words = sample_words();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let result = GameSession::new(&words, date);
    assert!(matches!(result, Err(ConfigError::PuzzleOutOfRange { .. })));
}

#[test]
fn test_containment_rule_marks_repeats_present() {
    // "eerie" against "there": canonical Wordle would leave one stray 'e'
    // grey, this game marks both yellow.
    let marks = score_guess("eerie", "there");
    assert_eq!(marks[0], Mark::Present);
    assert_eq!(marks[1], Mark::Present);
    assert_eq!(marks[4], Mark::Exact);
}

#[test]
fn test_word_list_file_to_game() {
    use std::fs;

    let path = std::env::temp_dir().join("daily_wordle_integration_words.json");
    fs::write(&path, SAMPLE_JSON).unwrap();

    let words = load_word_list_from_file(&path).unwrap();
    assert_eq!(words.answers().len(), 3);
    let (summary, _) = play(&words, EPOCH, "apple\n");
    assert!(summary.solved);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_malformed_word_list_file() {
    use std::fs;

    let path = std::env::temp_dir().join("daily_wordle_integration_bad.json");
    fs::write(&path, "{ not json").unwrap();

    let result = load_word_list_from_file(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_share_text_reaches_clipboard() {
    let words = sample_words();
    let mut session = GameSession::new(&words, EPOCH).unwrap();
    let mut presenter = CliPresenter::new(Cursor::new("apple\n".to_string()), Vec::new());
    let mut copied = None;
    let mut clipboard = |text: &str| {
        copied = Some(text.to_string());
        true
    };

    let summary = game_loop(&mut session, &mut presenter, &mut clipboard).unwrap();
    assert_eq!(copied.as_deref(), Some(summary.share_text.as_str()));
}
