//! # `tokenbook-evals` Corpus Scoring
//!
//! Moses `multi-bleu.perl` parity BLEU scoring over plain token sequences.
//!
//! This crate shares no state with the vocabulary tables in `tokenbook`; the
//! boundary is token sequences and nothing else. Inputs are accepted through
//! the [`tokenize::TokenizedText`] seam, so a raw sentence string, an
//! already-tokenized sequence, or an array of tokens all score identically.
//!
//! See:
//! * [`bleu_moses::sentence_bleu_moses`] for single-hypothesis scores.
//! * [`bleu_moses::corpus_bleu_moses`] for whole-corpus aggregation.
#![warn(missing_docs, unused)]

pub mod bleu_moses;
pub mod tokenize;

#[doc(inline)]
pub use bleu_moses::{
    BleuScore, corpus_bleu_moses, corpus_bleu_moses_detail, sentence_bleu_moses,
};
#[doc(inline)]
pub use tokenize::TokenizedText;
