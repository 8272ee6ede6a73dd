//! Deterministic selection of documents for manual inspection.

use tracing::warn;

use crate::corpus::{Corpus, Document};

/// A selected document with its corpus position (0-based line order among
/// loaded records) and answer length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exemplar<'a> {
    pub position: usize,
    pub length: usize,
    pub document: &'a Document,
}

/// Result of the near-mean-from-below selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NearMeanOutcome<'a> {
    Found(Exemplar<'a>),
    /// No answer is strictly shorter than the mean.
    NoneBelowMean,
    /// Fewer below-mean documents than the requested index.
    OutOfRange { requested: usize, available: usize },
}

impl<'a> NearMeanOutcome<'a> {
    pub fn exemplar(&self) -> Option<&Exemplar<'a>> {
        match self {
            Self::Found(e) => Some(e),
            _ => None,
        }
    }
}

fn with_lengths(corpus: &Corpus) -> Vec<Exemplar<'_>> {
    corpus
        .iter()
        .enumerate()
        .map(|(position, document)| Exemplar {
            position,
            length: document.answer_len(),
            document,
        })
        .collect()
}

/// The `k` shortest answers, ascending. Equal lengths keep file order.
pub fn shortest(corpus: &Corpus, k: usize) -> Vec<Exemplar<'_>> {
    let mut all = with_lengths(corpus);
    all.sort_by_key(|e| e.length);
    all.truncate(k);
    all
}

/// Among answers strictly shorter than `mean`, ordered by `mean - length`
/// ascending (closest to the mean first, ties in file order), pick the one
/// at zero-based `index`.
pub fn near_mean_below(corpus: &Corpus, mean: f64, index: usize) -> NearMeanOutcome<'_> {
    let mut below: Vec<Exemplar<'_>> = with_lengths(corpus)
        .into_iter()
        .filter(|e| (e.length as f64) < mean)
        .collect();

    if below.is_empty() {
        warn!("No answer is shorter than the mean length {:.2}", mean);
        return NearMeanOutcome::NoneBelowMean;
    }

    below.sort_by(|a, b| (mean - a.length as f64).total_cmp(&(mean - b.length as f64)));

    match below.get(index) {
        Some(e) => NearMeanOutcome::Found(*e),
        None => {
            warn!(
                "Near-mean exemplar index {} out of range: only {} answers below the mean",
                index,
                below.len()
            );
            NearMeanOutcome::OutOfRange {
                requested: index,
                available: below.len(),
            }
        }
    }
}
