use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::fmt;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the word, at this location.
    Hit,
    /// The letter is in the word, but somewhere else.
    Present,
    /// The letter does not occur in the word any more times than already credited by `Hit` or
    /// `Present` results for the same letter.
    Absent,
}

impl LetterResult {
    /// Parses a single feedback glyph: `v` (verde) for [`LetterResult::Hit`], `a` (amarillo) for
    /// [`LetterResult::Present`], and `n` (negro) for [`LetterResult::Absent`]. Case-insensitive.
    pub fn from_char(glyph: char) -> Option<LetterResult> {
        match glyph.to_lowercase().next()? {
            'v' => Some(LetterResult::Hit),
            'a' => Some(LetterResult::Present),
            'n' => Some(LetterResult::Absent),
            _ => None,
        }
    }

    /// The glyph understood by [`LetterResult::from_char`].
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Hit => 'v',
            LetterResult::Present => 'a',
            LetterResult::Absent => 'n',
        }
    }
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The feedback was not exactly five of the glyphs `v`, `a` or `n`.
    #[error("invalid feedback {0:?}: expected 5 characters using only 'v', 'a' or 'n'")]
    InvalidFeedback(String),
    /// A solver cannot be built without any words.
    #[error("the word list is empty")]
    EmptyWordList,
    /// A word did not have exactly five letters. Holds the length that was found.
    #[error("words must have exactly 5 letters, found {0}")]
    WordLength(usize),
    /// Reading a word list failed.
    #[error("could not read the word list: {0}")]
    Io(#[from] io::Error),
}

/// Parses a feedback string such as `"nnvav"` into one [`LetterResult`] per letter.
///
/// Leading and trailing whitespace is ignored. Nothing else is accepted.
///
/// ```
/// use rs_palabra_solver::*;
///
/// assert_eq!(
///     parse_feedback("vaNnn").unwrap(),
///     [
///         LetterResult::Hit,
///         LetterResult::Present,
///         LetterResult::Absent,
///         LetterResult::Absent,
///         LetterResult::Absent,
///     ]
/// );
/// assert!(parse_feedback("vvvv").is_err());
/// ```
pub fn parse_feedback(feedback: &str) -> Result<[LetterResult; WORD_LENGTH], WordleError> {
    let trimmed = feedback.trim();
    let invalid = || WordleError::InvalidFeedback(trimmed.to_string());
    if trimmed.chars().count() != WORD_LENGTH {
        return Err(invalid());
    }
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    for (result, glyph) in results.iter_mut().zip(trimmed.chars()) {
        *result = LetterResult::from_char(glyph).ok_or_else(invalid)?;
    }
    Ok(results)
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    pub guess: Word,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: [LetterResult; WORD_LENGTH],
}

impl GuessResult {
    /// Builds a result from the user-facing feedback string for the given guess.
    ///
    /// Validation happens here, so a `GuessResult` is always well-formed by the time it reaches
    /// [`WordRestrictions`](crate::details::WordRestrictions).
    pub fn parse(guess: Word, feedback: &str) -> Result<GuessResult, WordleError> {
        Ok(GuessResult {
            guess,
            results: parse_feedback(feedback)?,
        })
    }

    /// Returns `true` iff every letter was a [`LetterResult::Hit`].
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|result| *result == LetterResult::Hit)
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let feedback: String = self.results.iter().map(|r| r.to_char()).collect();
        write!(f, "{} {}", self.guess, feedback)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Word>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Word>),
    /// Indicates that no possible words remained, e.g. because the given word was not in the word
    /// bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are credited first. Remaining letters are then credited as `Present` only while
/// the objective still has an uncredited copy of that letter.
///
/// ```
/// use rs_palabra_solver::*;
///
/// let objective: Word = "perro".parse().unwrap();
/// let guess: Word = "carro".parse().unwrap();
///
/// let result = get_result_for_guess(&objective, &guess);
/// assert_eq!(
///     result.results,
///     [
///         LetterResult::Absent,
///         LetterResult::Absent,
///         LetterResult::Hit,
///         LetterResult::Hit,
///         LetterResult::Hit,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &Word, guess: &Word) -> GuessResult {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let mut uncredited: [Option<char>; WORD_LENGTH] = [None; WORD_LENGTH];
    for (index, (guess_letter, objective_letter)) in
        guess.letters().iter().zip(objective.letters()).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = LetterResult::Hit;
        } else {
            uncredited[index] = Some(*objective_letter);
        }
    }
    for (index, guess_letter) in guess.letters().iter().enumerate() {
        if results[index] == LetterResult::Hit {
            continue;
        }
        if let Some(slot) = uncredited
            .iter_mut()
            .find(|slot| **slot == Some(*guess_letter))
        {
            *slot = None;
            results[index] = LetterResult::Present;
        }
    }
    GuessResult {
        guess: *guess,
        results,
    }
}

/// The number of distinct feedback patterns for a five-letter guess (3<sup>5</sup>).
pub const NUM_COMPRESSED_GUESS_RESULTS: usize = 243;

/// A compact representation of a whole feedback pattern, packed in base 3.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CompressedGuessResult {
    data: u8,
}

impl CompressedGuessResult {
    /// Packs the given results.
    pub fn from_results(results: &[LetterResult; WORD_LENGTH]) -> CompressedGuessResult {
        let mut data: u8 = 0;
        for result in results.iter().rev() {
            let digit = match result {
                LetterResult::Absent => 0,
                LetterResult::Present => 1,
                LetterResult::Hit => 2,
            };
            data = data * 3 + digit;
        }
        CompressedGuessResult { data }
    }

    /// A dense index in `0..NUM_COMPRESSED_GUESS_RESULTS`.
    pub fn index(&self) -> usize {
        self.data as usize
    }
}
