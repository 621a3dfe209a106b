//! Per-letter feedback for a guess.
//!
//! A letter that is not in the right spot is marked [`Mark::Present`] whenever
//! the answer contains it at all. Repeated letters are not counted against
//! the answer, so `eerie` against `there` marks every `e` as a hit.

/// The result for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position (green)
    Exact,
    /// Letter appears elsewhere in the answer (yellow)
    Present,
    /// Letter is not in the answer
    Absent,
}

impl Mark {
    /// Symbol used in the shareable transcript.
    pub fn symbol(self) -> char {
        match self {
            Mark::Exact => '\u{1F7E9}',
            Mark::Present => '\u{1F7E8}',
            Mark::Absent => '\u{2B1C}',
        }
    }
}

/// Scores `guess` against `answer` position by position.
///
/// Both words are expected to be the same length and ASCII.
pub fn score_guess(guess: &str, answer: &str) -> Vec<Mark> {
    let answer = answer.as_bytes();
    guess
        .bytes()
        .zip(answer)
        .map(|(g, &a)| {
            if g == a {
                Mark::Exact
            } else if answer.contains(&g) {
                Mark::Present
            } else {
                Mark::Absent
            }
        })
        .collect()
}

pub fn is_solved(marks: &[Mark]) -> bool {
    marks.iter().all(|&m| m == Mark::Exact)
}

/// One transcript line, without the trailing newline.
pub fn transcript_line(marks: &[Mark]) -> String {
    marks.iter().map(|m| m.symbol()).collect()
}
