use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::scorers::ScoringStrategy;
use crate::scorers::WordScorer;
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::HashSet;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default number of words scored on the first round. See
/// [`SolverConfig::first_round_pool_size`].
pub const DEFAULT_FIRST_ROUND_POOL_SIZE: usize = 500;

/// Configures a [`Solver`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// How guesses are scored.
    pub strategy: ScoringStrategy,
    /// While every word of the bank is still possible, only the first this-many words are scored
    /// as candidate guesses. Scoring every word against every other word on the first round is the
    /// most expensive step of a game, and brings little benefit. `None` scores every word.
    ///
    /// The cap applies whichever [`ScoringStrategy`] is used. A cap of `0` is treated as `1`, so
    /// there is always a guess while any word is possible.
    pub first_round_pool_size: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: ScoringStrategy::default(),
            first_round_pool_size: Some(DEFAULT_FIRST_ROUND_POOL_SIZE),
        }
    }
}

/// A word along with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

/// Gets the list of words in the word bank that meet the given restrictions, in bank order.
///
/// ```
/// use rs_palabra_solver::*;
/// use rs_palabra_solver::details::WordRestrictions;
///
/// let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
/// let restrictions =
///     WordRestrictions::from_result(&GuessResult::parse(bank[1], "nnvvv").unwrap());
///
/// assert_eq!(filter_words(&bank, &restrictions), vec![bank[0]]);
/// ```
pub fn filter_words(bank: &[Word], restrictions: &WordRestrictions) -> Vec<Word> {
    bank.iter()
        .filter(|word| restrictions.is_satisfied_by(word))
        .copied()
        .collect()
}

/// Tracks what is known about the objective word, and suggests the next guess.
///
/// Each round, pass the guess and its feedback to [`Solver::update`]. The solver folds it into
/// its [`WordRestrictions`], recomputes the possible words from the whole bank, and then
/// [`Solver::select_next_guess`] picks the possible word that scores highest with the configured
/// [`WordScorer`].
///
/// ```
/// use rs_palabra_solver::*;
///
/// let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
/// let mut solver = Solver::new(bank.clone(), SolverConfig::default()).unwrap();
///
/// solver.update(&GuessResult::parse(bank[0], "vvvvv").unwrap());
///
/// assert_eq!(solver.select_next_guess(), Some(bank[0]));
/// ```
#[derive(Clone)]
pub struct Solver {
    bank: WordBank,
    config: SolverConfig,
    restrictions: WordRestrictions,
    rejected: HashSet<Word>,
    possible_words: Vec<Word>,
    scorer: Box<dyn WordScorer>,
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("bank", &self.bank)
            .field("config", &self.config)
            .field("restrictions", &self.restrictions)
            .field("rejected", &self.rejected)
            .field("possible_words", &self.possible_words)
            .finish_non_exhaustive()
    }
}

impl Solver {
    /// Constructs a solver that scores guesses with the scorer selected by `config`.
    ///
    /// Returns [`WordleError::EmptyWordList`] if the bank has no words.
    pub fn new(bank: WordBank, config: SolverConfig) -> Result<Solver, WordleError> {
        let scorer = config.strategy.build_scorer(&bank);
        Solver::with_scorer(bank, config, scorer)
    }

    /// Constructs a solver that scores guesses with the given scorer, ignoring `config.strategy`.
    ///
    /// The scorer is updated with the whole bank before it is first used.
    pub fn with_scorer(
        bank: WordBank,
        config: SolverConfig,
        mut scorer: Box<dyn WordScorer>,
    ) -> Result<Solver, WordleError> {
        if bank.is_empty() {
            return Err(WordleError::EmptyWordList);
        }
        let restrictions = WordRestrictions::new();
        let possible_words = bank.to_vec();
        scorer.update(&restrictions, &possible_words);
        Ok(Solver {
            bank,
            config,
            restrictions,
            rejected: HashSet::new(),
            possible_words,
            scorer,
        })
    }

    /// Adds the given guess result to what is known, and recomputes the possible words.
    ///
    /// Unless the result is solved, the guess itself is no longer possible either, even when its
    /// letters satisfy the restrictions (e.g. a repeated letter that only hit once). Guessed and
    /// rejected words are why [`Solver::possible_words`] can be shorter than
    /// [`filter_words`] over the bank and [`Solver::restrictions`].
    pub fn update(&mut self, result: &GuessResult) {
        self.restrictions.update(result);
        if !result.is_solved() {
            self.rejected.insert(result.guess);
        }
        self.refresh_possible_words();
    }

    /// Removes the given word from the possible words without any feedback for it, e.g. because
    /// the game does not accept it. It stays removed in later rounds.
    pub fn reject_guess(&mut self, word: &Word) {
        if self.rejected.insert(*word) {
            debug!("Rejected {}.", word);
            self.refresh_possible_words();
        }
    }

    /// Selects the best next guess, or `None` if no words are possible.
    ///
    /// Ties are broken in favour of the word that comes first in the bank.
    pub fn select_next_guess(&self) -> Option<Word> {
        let best = self
            .score_pool()
            .into_iter()
            .fold(None, |best: Option<ScoredGuess>, scored| match best {
                Some(best) if best.score >= scored.score => Some(best),
                _ => Some(scored),
            });
        if let Some(best) = &best {
            debug!("Selected {} with score {:.4}.", best.word, best.score);
        }
        best.map(|best| best.word)
    }

    /// Returns up to `num_guesses` of the best guesses, best first. Equal scores keep bank order.
    pub fn select_top_n_guesses(&self, num_guesses: usize) -> Vec<ScoredGuess> {
        let mut scored = self.score_pool();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(num_guesses);
        scored
    }

    /// The words that are still consistent with every result, in bank order.
    pub fn possible_words(&self) -> &[Word] {
        &self.possible_words
    }

    /// What is known so far about the objective word.
    pub fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }

    /// All the words this solver was built with.
    pub fn word_bank(&self) -> &WordBank {
        &self.bank
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn is_first_round(&self) -> bool {
        self.possible_words.len() == self.bank.len()
    }

    /// The words that are scored as candidate guesses this round.
    fn guess_pool(&self) -> &[Word] {
        match self.config.first_round_pool_size {
            Some(pool_size) if self.is_first_round() => {
                &self.possible_words[..pool_size.max(1).min(self.possible_words.len())]
            }
            _ => &self.possible_words,
        }
    }

    fn score_pool(&self) -> Vec<ScoredGuess> {
        let pool = self.guess_pool();
        // `collect` keeps the pool order, so parallel scoring doesn't change tie-breaking.
        pool.par_iter()
            .map(|word| {
                let score = self.scorer.score_word(word);
                trace!("Scored {} at {:.4}.", word, score);
                ScoredGuess { word: *word, score }
            })
            .collect()
    }

    fn refresh_possible_words(&mut self) {
        self.possible_words = filter_words(&self.bank, &self.restrictions);
        if !self.rejected.is_empty() {
            self.possible_words
                .retain(|word| !self.rejected.contains(word));
        }
        debug!("{} possible words remain.", self.possible_words.len());
        self.scorer.update(&self.restrictions, &self.possible_words);
    }
}

/// Attempts to guess the given word within the maximum number of guesses, using the given solver.
///
/// ```
/// use rs_palabra_solver::*;
///
/// let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
/// let solver = Solver::new(bank, SolverConfig::default()).unwrap();
///
/// let objective: Word = "mango".parse().unwrap();
/// assert!(matches!(play_game(&objective, 6, solver), GameResult::Success(_)));
/// ```
pub fn play_game(objective: &Word, max_num_guesses: u32, mut solver: Solver) -> GameResult {
    let mut guesses: Vec<Word> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = match solver.select_next_guess() {
            Some(guess) => guess,
            None => return GameResult::UnknownWord,
        };
        guesses.push(guess);
        let result = get_result_for_guess(objective, &guess);
        if result.is_solved() {
            return GameResult::Success(guesses);
        }
        solver.update(&result);
    }
    GameResult::Failure(guesses)
}
