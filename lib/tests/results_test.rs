#[macro_use]
extern crate assert_matches;

use rs_palabra_solver::*;

use std::result::Result;

use rs_palabra_solver::LetterResult::{Absent, Hit, Present};

fn word(word: &str) -> Word {
    Word::new(word).unwrap()
}

#[test]
fn get_result_for_guess_correct() {
    let result = get_result_for_guess(&word("perro"), &word("perro"));

    assert_eq!(result.guess, word("perro"));
    assert_eq!(result.results, [Hit; WORD_LENGTH]);
    assert!(result.is_solved());
}

#[test]
fn get_result_for_guess_duplicate_letters_all_hit() {
    let result = get_result_for_guess(&word("perro"), &word("carro"));

    assert_eq!(result.results, [Absent, Absent, Hit, Hit, Hit]);
    assert!(!result.is_solved());
}

#[test]
fn get_result_for_guess_partial() {
    let result = get_result_for_guess(&word("mango"), &word("gorra"));
    assert_eq!(result.results, [Present, Present, Absent, Absent, Present]);

    let result = get_result_for_guess(&word("arroz"), &word("error"));
    assert_eq!(result.results, [Absent, Hit, Hit, Hit, Absent]);
}

#[test]
fn get_result_for_guess_repeated_guess_letter_capped_by_objective() {
    let result = get_result_for_guess(&word("llama"), &word("aaaaa"));
    assert_eq!(result.results, [Absent, Absent, Hit, Absent, Hit]);

    let result = get_result_for_guess(&word("pizza"), &word("aaaaa"));
    assert_eq!(result.results, [Absent, Absent, Absent, Absent, Hit]);

    let result = get_result_for_guess(&word("duque"), &word("aaaaa"));
    assert_eq!(result.results, [Absent; WORD_LENGTH]);

    // A single 'a' at the third position: only that position is credited.
    let result = get_result_for_guess(&word("plato"), &word("aaaaa"));
    assert_eq!(result.results, [Absent, Absent, Hit, Absent, Absent]);
    assert_eq!(
        result
            .results
            .iter()
            .filter(|result| **result != Absent)
            .count(),
        1
    );
}

#[test]
fn get_result_for_guess_present_credited_once() {
    // Only one 'o' in the objective, so only the first unmatched 'o' is credited.
    let result = get_result_for_guess(&word("gorra"), &word("ocaso"));

    assert_eq!(result.results, [Present, Absent, Present, Absent, Absent]);
}

#[test]
fn get_result_for_guess_self_is_all_hit() {
    for text in ["perro", "carro", "mango", "ñandú", "aaaaa"] {
        assert!(get_result_for_guess(&word(text), &word(text)).is_solved());
    }
}

#[test]
fn parse_feedback_succeeds() -> Result<(), WordleError> {
    assert_eq!(parse_feedback("nnvvv")?, [Absent, Absent, Hit, Hit, Hit]);
    assert_eq!(parse_feedback("  VaNaV\n")?, [Hit, Present, Absent, Present, Hit]);
    Ok(())
}

#[test]
fn parse_feedback_wrong_length_fails() {
    assert_matches!(parse_feedback("vvvv"), Err(WordleError::InvalidFeedback(_)));
    assert_matches!(parse_feedback("vvvvvv"), Err(WordleError::InvalidFeedback(_)));
    assert_matches!(parse_feedback(""), Err(WordleError::InvalidFeedback(_)));
}

#[test]
fn parse_feedback_unknown_glyph_fails() {
    assert_matches!(
        parse_feedback("vvgvv"),
        Err(WordleError::InvalidFeedback(feedback)) if feedback == "vvgvv"
    );
    assert_matches!(parse_feedback("v.vvv"), Err(WordleError::InvalidFeedback(_)));
    assert_matches!(parse_feedback("c"), Err(WordleError::InvalidFeedback(_)));
}

#[test]
fn guess_result_parse_and_display() -> Result<(), WordleError> {
    let result = GuessResult::parse(word("carro"), "nnvvv")?;

    assert_eq!(result.to_string(), "carro nnvvv");
    assert!(GuessResult::parse(word("perro"), "vvvvv")?.is_solved());
    Ok(())
}
