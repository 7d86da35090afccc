//! A solver for Spanish five-letter Wordle puzzles.
//!
//! The [`Solver`] keeps track of what each guess revealed about the objective word, filters the
//! [`WordBank`] down to the words that are still possible, and suggests the guess that is expected
//! to reveal the most information about the rest.
//!
//! ```
//! use rs_palabra_solver::*;
//!
//! let bank = WordBank::from_iterator(["perro", "carro", "mango", "gorra"]);
//! let mut solver = Solver::new(bank, SolverConfig::default()).unwrap();
//!
//! let guess = solver.select_next_guess().unwrap();
//! // Feedback as typed by a player: v = right place, a = elsewhere, n = not in the word.
//! let result = GuessResult::parse(guess, "nnvvv").unwrap();
//! solver.update(&result);
//!
//! assert!(solver.possible_words().len() < 4);
//! ```

mod data;
mod engine;
mod restrictions;
mod results;
pub mod scorers;

pub use data::Word;
pub use data::WordBank;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use results::*;
pub use scorers::ScoringStrategy;

/// Building blocks for implementing your own scorers.
pub mod details {
    pub use crate::data::WordCounter;
    pub use crate::restrictions::WordRestrictions;
}
