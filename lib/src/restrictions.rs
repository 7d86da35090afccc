use crate::data::Word;
use crate::data::WORD_LENGTH;
use crate::results::GuessResult;
use crate::results::LetterResult;
use std::collections::HashSet;
use std::iter::zip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines letter restrictions that a word must adhere to, accumulated over every guess result.
///
/// A letter that is known to be in the word is never treated as excluded: an `Absent` result for
/// such a letter only means the word holds no further copies of it. If a letter that was excluded
/// in an earlier result is later reported in the word, the results contradict each other and no
/// word satisfies the restrictions any more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordRestrictions {
    /// The letter known to be at each location.
    fixed: [Option<char>; WORD_LENGTH],
    /// Letters known not to be at each location.
    forbidden_at: [HashSet<char>; WORD_LENGTH],
    /// Letters known to be somewhere in the word.
    required: HashSet<char>,
    /// Letters known not to be anywhere in the word.
    excluded: HashSet<char>,
    /// Set once two results disagree about whether a letter is in the word.
    contradictory: bool,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object with all letters unknown.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> WordRestrictions {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(result);
        restrictions
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// Every `Hit` and `Present` of the result is folded in before any `Absent` is considered, so
    /// a repeated letter that was credited anywhere in this guess is not excluded.
    pub fn update(&mut self, guess_result: &GuessResult) {
        let letters_and_results = || zip(guess_result.guess.letters(), &guess_result.results);
        for (index, (letter, result)) in letters_and_results().enumerate() {
            match result {
                LetterResult::Hit => {
                    self.fixed[index] = Some(*letter);
                }
                LetterResult::Present => {
                    self.forbidden_at[index].insert(*letter);
                }
                LetterResult::Absent => continue,
            }
            self.required.insert(*letter);
            if self.excluded.remove(letter) {
                self.contradictory = true;
            }
        }
        for (letter, result) in letters_and_results() {
            if *result == LetterResult::Absent && !self.required.contains(letter) {
                self.excluded.insert(*letter);
            }
        }
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let letters = word.letters();
        !self.contradictory
            && zip(&self.fixed, letters).all(|(fixed, letter)| fixed.map_or(true, |f| f == *letter))
            && zip(&self.forbidden_at, letters).all(|(forbidden, letter)| !forbidden.contains(letter))
            && !letters.iter().any(|letter| self.excluded.contains(letter))
            && self.required.iter().all(|letter| word.contains(*letter))
    }

    /// The letter known to be at each location, if any.
    pub fn fixed(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.fixed
    }

    /// Letters known not to be at the given location.
    pub fn forbidden_at(&self, index: usize) -> &HashSet<char> {
        &self.forbidden_at[index]
    }

    /// Letters known to be somewhere in the word.
    pub fn required_letters(&self) -> &HashSet<char> {
        &self.required
    }

    /// Letters known not to be anywhere in the word.
    pub fn excluded_letters(&self) -> &HashSet<char> {
        &self.excluded
    }

    /// Returns `true` iff the results seen so far disagree with each other, so that no word can
    /// satisfy them.
    pub fn is_contradictory(&self) -> bool {
        self.contradictory
    }

    /// Returns `true` iff nothing is known yet.
    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none)
            && self.forbidden_at.iter().all(HashSet::is_empty)
            && self.required.is_empty()
            && self.excluded.is_empty()
    }
}
