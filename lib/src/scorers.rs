use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::get_result_for_guess;
use crate::results::CompressedGuessResult;
use crate::results::NUM_COMPRESSED_GUESS_RESULTS;
use dyn_clone::DynClone;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gives words a score, where the maximum score indicates the best guess.
///
/// The [`Solver`](crate::Solver) calls [`WordScorer::update`] every time its list of possible
/// words changes, and then scores each word in its guess pool. Scorers must be cheap to clone, as
/// the solver is cloned once per game when benchmarking.
pub trait WordScorer: DynClone + Send + Sync {
    /// Updates the scorer with the latest restrictions and the updated list of possible words.
    fn update(&mut self, restrictions: &WordRestrictions, possible_words: &[Word]);
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &Word) -> f64;
}

dyn_clone::clone_trait_object!(WordScorer);

/// Selects which [`WordScorer`] a [`Solver`](crate::Solver) uses.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringStrategy {
    /// Use the [`EntropyScorer`].
    #[default]
    Entropy,
    /// Use the [`LetterFrequencyScorer`].
    LetterFrequency,
}

impl ScoringStrategy {
    /// Builds the scorer for this strategy, primed with the given possible words.
    pub fn build_scorer(&self, possible_words: &[Word]) -> Box<dyn WordScorer> {
        match self {
            ScoringStrategy::Entropy => Box::new(EntropyScorer::new(possible_words)),
            ScoringStrategy::LetterFrequency => Box::new(LetterFrequencyScorer::new(possible_words)),
        }
    }
}

/// Computes the Shannon entropy, in bits, of the feedback patterns that `guess` would produce
/// against each of the `possible_words`.
///
/// The result lies in `[0, log2(n)]` for `n` possible words, reaching `log2(n)` only when every
/// possible word yields a different pattern. The entropy of an empty list is undefined; this
/// returns `0.0` for it.
///
/// ```
/// use rs_palabra_solver::scorers::entropy;
/// use rs_palabra_solver::Word;
///
/// let words: Vec<Word> = ["perro", "carro", "mango"]
///     .iter()
///     .map(|word| word.parse().unwrap())
///     .collect();
///
/// // Each word gets a different pattern, so a guess splits the list completely.
/// assert!((entropy(&words[0], &words) - 3f64.log2()).abs() < 1e-9);
/// ```
pub fn entropy(guess: &Word, possible_words: &[Word]) -> f64 {
    if possible_words.is_empty() {
        return 0.0;
    }
    let mut num_words_per_result = [0u32; NUM_COMPRESSED_GUESS_RESULTS];
    for objective in possible_words {
        let result = get_result_for_guess(objective, guess);
        num_words_per_result[CompressedGuessResult::from_results(&result.results).index()] += 1;
    }
    // Sum in a canonical order so that guesses with the same partition sizes score identically.
    let mut counts: Vec<u32> = num_words_per_result
        .into_iter()
        .filter(|count| *count > 0)
        .collect();
    counts.sort_unstable();
    let total = possible_words.len() as f64;
    counts.into_iter().fold(0.0, |acc, count| {
        let probability = count as f64 / total;
        acc - probability * probability.log2()
    })
}

/// Scores words by the expected information gained from guessing them, i.e. the [`entropy`] of
/// their feedback patterns over the possible words.
///
/// This is the most effective strategy, but also the most expensive: scoring one word costs one
/// simulated guess per possible word.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntropyScorer {
    possible_words: Vec<Word>,
}

impl EntropyScorer {
    /// Constructs an `EntropyScorer` for the given possible words.
    ///
    /// ```
    /// use rs_palabra_solver::scorers::{EntropyScorer, WordScorer};
    /// use rs_palabra_solver::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
    /// let scorer = EntropyScorer::new(&bank);
    ///
    /// assert!(scorer.score_word(&bank[0]) > 0.0);
    /// ```
    pub fn new(possible_words: &[Word]) -> EntropyScorer {
        EntropyScorer {
            possible_words: possible_words.to_vec(),
        }
    }
}

impl WordScorer for EntropyScorer {
    fn update(&mut self, _restrictions: &WordRestrictions, possible_words: &[Word]) {
        self.possible_words = possible_words.to_vec();
    }

    fn score_word(&self, word: &Word) -> f64 {
        entropy(word, &self.possible_words)
    }
}

/// Scores words by the number of possible words that share each of its letters, summed across
/// each unique letter in the word.
///
/// Much cheaper than the [`EntropyScorer`], at the cost of needing more guesses on average.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterFrequencyScorer {
    word_counter: WordCounter,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer` for the given possible words.
    pub fn new(possible_words: &[Word]) -> LetterFrequencyScorer {
        LetterFrequencyScorer {
            word_counter: WordCounter::new(possible_words),
        }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn update(&mut self, _restrictions: &WordRestrictions, possible_words: &[Word]) {
        self.word_counter = WordCounter::new(possible_words);
    }

    fn score_word(&self, word: &Word) -> f64 {
        let unique_letters: HashSet<char> = word.letters().iter().copied().collect();
        unique_letters
            .into_iter()
            .map(|letter| self.word_counter.num_words_with_letter(letter))
            .sum::<u32>() as f64
    }
}
