//! # Moses BLEU Scoring
//!
//! Parity implementation of the Moses `multi-bleu.perl` corpus BLEU: clipped
//! n-gram precisions for orders 1..=4, closest-reference-length brevity
//! penalty, and statistics aggregated over the whole corpus before the score
//! is computed (not an average of per-sentence scores).
//!
//! Scores are on a 0-100 scale. To match the numbers the perl script prints,
//! the overall score is rounded to 2 decimals and the component precisions
//! to 1 decimal.

use ahash::AHashMap;

use crate::tokenize::TokenizedText;

const MAX_ORDER: usize = 4;

/// Corpus BLEU with its component n-gram precisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BleuScore {
    /// The overall score, 0-100, rounded to 2 decimals.
    pub bleu: f64,

    /// Clipped n-gram precisions for orders 1..=4, as percentages rounded
    /// to 1 decimal.
    pub precisions: [f64; 4],
}

impl BleuScore {
    /// The ordered `[bleu, p1, p2, p3, p4]` breakdown.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.bleu,
            self.precisions[0],
            self.precisions[1],
            self.precisions[2],
            self.precisions[3],
        ]
    }
}

/// Clipped n-gram counting stats, summed over a corpus.
#[derive(Debug, Default)]
struct CorpusStats {
    hyp_length: usize,
    ref_length: usize,
    correct: [usize; MAX_ORDER],
    total: [usize; MAX_ORDER],
}

fn ngram_counts<'a>(
    tokens: &'a [String],
    order: usize,
) -> AHashMap<&'a [String], usize> {
    let mut counts = AHashMap::new();
    for gram in tokens.windows(order) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// The reference length closest to `hyp_len`.
///
/// Ties break toward the earlier reference, as in `multi-bleu.perl`.
fn closest_ref_length(
    references: &[Vec<String>],
    hyp_len: usize,
) -> usize {
    let mut closest = 0;
    let mut best = usize::MAX;
    for reference in references {
        let diff = reference.len().abs_diff(hyp_len);
        if diff < best {
            best = diff;
            closest = reference.len();
        }
    }
    closest
}

fn accumulate(
    stats: &mut CorpusStats,
    references: &[Vec<String>],
    hypothesis: &[String],
) {
    stats.hyp_length += hypothesis.len();
    stats.ref_length += closest_ref_length(references, hypothesis.len());

    for order in 1..=MAX_ORDER {
        let hyp_counts = ngram_counts(hypothesis, order);
        if hyp_counts.is_empty() {
            continue;
        }

        // Candidate counts are clipped by the max count over all references.
        let mut max_ref_counts: AHashMap<&[String], usize> = AHashMap::new();
        for reference in references {
            for (gram, count) in ngram_counts(reference, order) {
                let entry = max_ref_counts.entry(gram).or_insert(0);
                *entry = (*entry).max(count);
            }
        }

        let slot = order - 1;
        for (gram, count) in hyp_counts {
            stats.total[slot] += count;
            let clip = max_ref_counts.get(gram).copied().unwrap_or(0);
            stats.correct[slot] += count.min(clip);
        }
    }
}

fn round_to(
    value: f64,
    places: i32,
) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn score(stats: &CorpusStats) -> BleuScore {
    let mut precisions = [0.0f64; MAX_ORDER];
    for slot in 0..MAX_ORDER {
        if stats.total[slot] > 0 {
            precisions[slot] = stats.correct[slot] as f64 / stats.total[slot] as f64;
        }
    }

    // Any zero precision (including empty input) zeroes the whole score;
    // Moses applies no smoothing.
    let bleu = if stats.hyp_length == 0 || precisions.iter().any(|&p| p == 0.0) {
        0.0
    } else {
        let log_avg = precisions.iter().map(|p| p.ln()).sum::<f64>() / MAX_ORDER as f64;
        let brevity = if stats.hyp_length < stats.ref_length {
            (1.0 - stats.ref_length as f64 / stats.hyp_length as f64).exp()
        } else {
            1.0
        };
        brevity * log_avg.exp()
    };

    BleuScore {
        bleu: round_to(bleu * 100.0, 2),
        precisions: core::array::from_fn(|slot| round_to(precisions[slot] * 100.0, 1)),
    }
}

/// Corpus BLEU with the component breakdown.
///
/// ## Arguments
/// * `list_of_references` - one reference group per hypothesis.
/// * `hypotheses` - the hypothesis sequence.
/// * `lowercase` - case-fold all tokens before counting.
///
/// ## Returns
/// The [`BleuScore`] aggregated over the whole corpus.
///
/// ## Panics
/// Panics if the reference-group and hypothesis counts differ.
pub fn corpus_bleu_moses_detail<R, H>(
    list_of_references: &[Vec<R>],
    hypotheses: &[H],
    lowercase: bool,
) -> BleuScore
where
    R: TokenizedText,
    H: TokenizedText,
{
    assert_eq!(
        list_of_references.len(),
        hypotheses.len(),
        "each hypothesis needs a matching reference group"
    );

    let mut stats = CorpusStats::default();
    for (references, hypothesis) in list_of_references.iter().zip(hypotheses) {
        let references: Vec<Vec<String>> = references
            .iter()
            .map(|reference| reference.to_tokens(lowercase))
            .collect();
        let hypothesis = hypothesis.to_tokens(lowercase);

        accumulate(&mut stats, &references, &hypothesis);
    }
    score(&stats)
}

/// Corpus BLEU, 0-100.
///
/// See [`corpus_bleu_moses_detail`] for the aggregation semantics.
pub fn corpus_bleu_moses<R, H>(
    list_of_references: &[Vec<R>],
    hypotheses: &[H],
    lowercase: bool,
) -> f64
where
    R: TokenizedText,
    H: TokenizedText,
{
    corpus_bleu_moses_detail(list_of_references, hypotheses, lowercase).bleu
}

/// Sentence-level BLEU against one or more references, 0-100.
///
/// ## Arguments
/// * `references` - the reference sequences.
/// * `hypothesis` - the hypothesis.
/// * `lowercase` - case-fold all tokens before counting.
pub fn sentence_bleu_moses<R, H>(
    references: &[R],
    hypothesis: &H,
    lowercase: bool,
) -> f64
where
    R: TokenizedText,
    H: TokenizedText + ?Sized,
{
    let references: Vec<Vec<String>> = references
        .iter()
        .map(|reference| reference.to_tokens(lowercase))
        .collect();
    let hypothesis = hypothesis.to_tokens(lowercase);

    let mut stats = CorpusStats::default();
    accumulate(&mut stats, &references, &hypothesis);
    score(&stats).bleu
}
