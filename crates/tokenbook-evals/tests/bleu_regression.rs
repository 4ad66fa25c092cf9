#![allow(missing_docs)]

//! Regression fixtures for Moses BLEU parity.
//!
//! Expected values come from scoring these sentences with `multi-bleu.perl`.

use tokenbook_evals::{corpus_bleu_moses, corpus_bleu_moses_detail, sentence_bleu_moses};

const HYP_1: &str = "this is a test sentence to evaluate the good bleu score . \u{8bcd}";
const REF_1A: &str = "this is a test sentence to evaluate the bleu score .";
const REF_1B: &str = "this is a test sentence to evaluate the good score .";

const HYP_2: &str = "i believe that that the script is \u{8bcd} perfectly correct .";
const REF_2A: &str = "i believe that the script is perfectly correct .";

fn assert_close(
    actual: f64,
    expected: f64,
) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn sentence_string_hypothesis() {
    assert_close(sentence_bleu_moses(&[REF_1A], HYP_1, false), 67.03);
}

#[test]
fn sentence_token_list_hypothesis() {
    let hypothesis: Vec<&str> = HYP_1.split_whitespace().collect();
    let reference: Vec<&str> = REF_1A.split_whitespace().collect();

    assert_close(sentence_bleu_moses(&[reference], &hypothesis, false), 67.03);
}

#[test]
fn sentence_multi_references() {
    assert_close(sentence_bleu_moses(&[REF_1A, REF_1B], HYP_1, false), 76.12);
}

#[test]
fn corpus_score() {
    let list_of_references = [vec![REF_1A, REF_1B], vec![REF_2A]];
    let hypotheses = [HYP_1, HYP_2];

    assert_close(
        corpus_bleu_moses(&list_of_references, &hypotheses, false),
        63.02,
    );
}

#[test]
fn corpus_breakdown() {
    let list_of_references = [vec![REF_1A, REF_1B], vec![REF_2A]];
    let hypotheses = [HYP_1, HYP_2];

    let detail = corpus_bleu_moses_detail(&list_of_references, &hypotheses, false);
    let expected = [63.02, 87.5, 77.3, 60.0, 38.9];

    for (actual, expected) in detail.as_array().into_iter().zip(expected) {
        assert_close(actual, expected);
    }
}

#[test]
#[should_panic(expected = "matching reference group")]
fn mismatched_corpus_lengths_panic() {
    let list_of_references = [vec![REF_1A]];
    let hypotheses = [HYP_1, HYP_2];
    corpus_bleu_moses(&list_of_references, &hypotheses, false);
}

#[test]
fn corpus_is_not_average_of_sentences() {
    let list_of_references = [vec![REF_1A, REF_1B], vec![REF_2A]];
    let hypotheses = [HYP_1, HYP_2];

    let corpus = corpus_bleu_moses(&list_of_references, &hypotheses, false);
    let mean = (sentence_bleu_moses(&[REF_1A, REF_1B], HYP_1, false)
        + sentence_bleu_moses(&[REF_2A], HYP_2, false))
        / 2.0;

    assert!((corpus - mean).abs() > 0.5);
}
