#[macro_use]
extern crate assert_matches;

use rs_palabra_solver::details::*;
use rs_palabra_solver::scorers::*;
use rs_palabra_solver::*;

use std::result::Result;

const WORDS: &str = include_str!("../../data/palabras.txt");

fn word(word: &str) -> Word {
    Word::new(word).unwrap()
}

macro_rules! test_scorer {
    ($construct_scorer_from_bank_fn:ident) => {
        #[test]
        fn solve_wordle() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(["perro", "carro", "gorra", "barco", "arroz", "cerdo"]);
            let scorer = $construct_scorer_from_bank_fn(&bank);
            let solver = Solver::with_scorer(bank.clone(), SolverConfig::default(), scorer)?;

            let result = play_game(&word("arroz"), bank.len() as u32, solver);

            assert_matches!(result, GameResult::Success(_guesses));
            Ok(())
        }

        #[test]
        fn try_solve_unknown_word() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(["perro", "carro", "gorra", "barco", "arroz", "cerdo"]);
            let scorer = $construct_scorer_from_bank_fn(&bank);
            let solver = Solver::with_scorer(bank.clone(), SolverConfig::default(), scorer)?;

            let result = play_game(&word("otros"), bank.len() as u32 + 1, solver);

            assert_matches!(result, GameResult::UnknownWord);
            Ok(())
        }

        #[test]
        fn solve_every_sample_word() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(WORDS.split_whitespace());
            let scorer = $construct_scorer_from_bank_fn(&bank);
            let solver = Solver::with_scorer(bank.clone(), SolverConfig::default(), scorer)?;

            for objective in bank.iter().step_by(17) {
                let result = play_game(objective, bank.len() as u32, solver.clone());

                assert_matches!(result, GameResult::Success(guesses) if guesses.last() == Some(objective));
            }
            Ok(())
        }
    };
}

mod entropy_scorer {
    use super::*;

    fn new_scorer(bank: &WordBank) -> Box<dyn WordScorer> {
        Box::new(EntropyScorer::new(bank))
    }

    test_scorer!(new_scorer);
}

mod letter_frequency_scorer {
    use super::*;

    fn new_scorer(bank: &WordBank) -> Box<dyn WordScorer> {
        Box::new(LetterFrequencyScorer::new(bank))
    }

    test_scorer!(new_scorer);
}

#[test]
fn entropy_is_bounded_by_log_of_possible_words() {
    let bank = WordBank::from_iterator(WORDS.split_whitespace());
    let max_entropy = (bank.len() as f64).log2();

    for guess in bank.iter().take(40) {
        let score = entropy(guess, &bank);

        assert!(score >= 0.0);
        assert!(score <= max_entropy + 1e-9);
    }
}

#[test]
fn entropy_reaches_max_only_when_every_pattern_differs() {
    let possible_words = [word("perro"), word("carro"), word("mango")];

    assert!((entropy(&word("carro"), &possible_words) - 3f64.log2()).abs() < 1e-9);
    // No letters in common, so every word gives the same pattern.
    assert_eq!(entropy(&word("zzzzz"), &possible_words), 0.0);
    // "perro" and "tieso" are both "nnnnv" against "mundo".
    let clashing_words = [word("perro"), word("tieso"), word("mango")];
    assert!(entropy(&word("mundo"), &clashing_words) < 3f64.log2());
}

#[test]
fn scorer_update_uses_possible_words() {
    let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
    let mut scorer = EntropyScorer::new(&bank);
    let restrictions = WordRestrictions::new();

    scorer.update(&restrictions, &bank[..2]);

    assert_eq!(scorer.score_word(&word("zzzzz")), 0.0);
    assert_eq!(scorer.score_word(&bank[0]), 1.0);
}

#[test]
fn word_counter_matches_letter_frequency_scores() {
    let bank = WordBank::from_iterator(["perro", "carro", "mango"]);
    let counter = WordCounter::new(&bank);
    let scorer = LetterFrequencyScorer::new(&bank);

    let expected: u32 = ['m', 'a', 'n', 'g', 'o']
        .iter()
        .map(|letter| counter.num_words_with_letter(*letter))
        .sum();

    assert_eq!(scorer.score_word(&bank[2]), expected as f64);
}
