use crate::results::WordleError;
use log::info;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word of the game.
pub const WORD_LENGTH: usize = 5;

/// A five-letter word, stored lower-cased.
///
/// Letters are `char`s rather than bytes so that words such as `"ñandú"` are five letters long.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

impl Word {
    /// Constructs a word from the given string, after trimming and lower-casing it.
    ///
    /// ```
    /// use rs_palabra_solver::Word;
    ///
    /// let word = Word::new(" Ñandú ").unwrap();
    /// assert_eq!(word.to_string(), "ñandú");
    /// assert!(Word::new("gato").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Word, WordleError> {
        let normalized = word.trim().to_lowercase();
        let num_letters = normalized.chars().count();
        if num_letters != WORD_LENGTH {
            return Err(WordleError::WordLength(num_letters));
        }
        let mut letters = [' '; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(normalized.chars()) {
            *slot = letter;
        }
        Ok(Word { letters })
    }

    /// The letters of this word, in order.
    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Returns `true` iff the word has the given letter at any location.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Word::new(word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Contains all the possible words for this game, in the order they were provided.
///
/// Words are lower-cased and duplicates are dropped, keeping the first occurrence. Tokens that are
/// not exactly five alphabetic letters long are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordBank {
    all_words: Vec<Word>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading whitespace-separated words from the given reader.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self, WordleError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            words.extend(line.split_whitespace().map(str::to_string));
        }
        let bank = WordBank::from_iterator(words);
        info!("Loaded {} words from the reader.", bank.len());
        Ok(bank)
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// ```
    /// use rs_palabra_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["perro", "Perro", "gato", "mango"]);
    /// assert_eq!(bank.len(), 2);
    /// ```
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<Word> = HashSet::new();
        let all_words = words
            .into_iter()
            .filter_map(|word| {
                let token = word.as_ref().trim();
                if !token.chars().all(char::is_alphabetic) {
                    return None;
                }
                Word::new(token).ok()
            })
            .filter(|word| seen.insert(*word))
            .collect();
        WordBank { all_words }
    }

    /// Returns `true` iff the bank holds the given word.
    pub fn contains(&self, word: &Word) -> bool {
        self.all_words.contains(word)
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Counts the number of words that contain each letter.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordCounter {
    num_words: u32,
    num_words_by_letter: HashMap<char, u32>,
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new(words: &[Word]) -> WordCounter {
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            let unique_letters: HashSet<char> = word.letters().iter().copied().collect();
            for letter in unique_letters {
                *num_words_by_letter.entry(letter).or_insert(0) += 1;
            }
        }
        WordCounter {
            num_words: words.len() as u32,
            num_words_by_letter,
        }
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }

    /// The number of words that were counted.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<Word> {
        words.iter().map(|word| Word::new(word).unwrap()).collect()
    }

    #[test]
    fn word_counts_letters_not_bytes() -> Result<(), WordleError> {
        let word = Word::new("ÑANDÚ")?;

        assert_eq!(word.letters(), &['ñ', 'a', 'n', 'd', 'ú']);
        assert!(word.contains('ñ'));
        assert!(!word.contains('u'));
        Ok(())
    }

    #[test]
    fn word_rejects_wrong_length() {
        assert!(matches!(Word::new("sol"), Err(WordleError::WordLength(3))));
        assert!(matches!(
            Word::new("caminos"),
            Err(WordleError::WordLength(7))
        ));
    }

    #[test]
    fn word_counter_num_words_with_letter() {
        let counter = WordCounter::new(&words(&["perro", "carro", "mango"]));

        assert_eq!(counter.num_words(), 3);
        assert_eq!(counter.num_words_with_letter('r'), 2);
        assert_eq!(counter.num_words_with_letter('o'), 3);
        assert_eq!(counter.num_words_with_letter('a'), 2);
        assert_eq!(counter.num_words_with_letter('p'), 1);

        // Missing letters:
        assert_eq!(counter.num_words_with_letter('z'), 0);
    }

    #[test]
    fn word_counter_empty() {
        let counter = WordCounter::new(&[]);

        assert_eq!(counter.num_words(), 0);
        assert_eq!(counter.num_words_with_letter('a'), 0);
    }
}
