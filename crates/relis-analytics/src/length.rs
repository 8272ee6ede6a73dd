//! Answer-length statistics: global and per-language mean/median, and the
//! fixed-bin length histogram.

use std::collections::HashMap;

use crate::corpus::Corpus;

/// Language key for records without a `Language` field.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Mean and median over a list of lengths. Both are 0 for an empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LengthSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

impl LengthSummary {
    pub fn from_lengths(lengths: &[usize]) -> Self {
        if lengths.is_empty() {
            return Self::default();
        }

        let count = lengths.len();
        let mean = lengths.iter().sum::<usize>() as f64 / count as f64;

        let mut sorted = lengths.to_vec();
        sorted.sort_unstable();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        };

        Self { count, mean, median }
    }
}

/// One histogram bucket covering `low..=high`, or `low..` when `high` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBin {
    pub label: String,
    pub low: usize,
    pub high: Option<usize>,
    pub count: usize,
}

impl HistogramBin {
    pub fn contains(&self, length: usize) -> bool {
        length >= self.low && self.high.map_or(true, |h| length <= h)
    }
}

/// Contiguous, exhaustive length histogram over `[0, ∞)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total: usize,
}

impl Histogram {
    /// Build bins from strictly increasing inclusive upper bounds; a final
    /// open-ended bin follows the last bound.
    /// Labels read `0-50`, `51-100`, ..., `2001+`.
    pub fn build(lengths: &[usize], upper_bounds: &[usize]) -> Self {
        let mut bins = Vec::with_capacity(upper_bounds.len() + 1);
        let mut low = 0;
        for &high in upper_bounds {
            bins.push(HistogramBin {
                label: format!("{}-{}", low, high),
                low,
                high: Some(high),
                count: 0,
            });
            low = high.saturating_add(1);
        }
        bins.push(HistogramBin {
            label: format!("{}+", low),
            low,
            high: None,
            count: 0,
        });

        for &length in lengths {
            if let Some(bin) = bins.iter_mut().find(|b| b.contains(length)) {
                bin.count += 1;
            }
        }

        Self {
            bins,
            total: lengths.len(),
        }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of all lengths in `bin`, as a percentage. 0 when there are none.
    pub fn percentage(&self, bin: &HistogramBin) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            bin.count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn count(&self, label: &str) -> Option<usize> {
        self.bins.iter().find(|b| b.label == label).map(|b| b.count)
    }
}

/// All answer-length aggregates for a corpus.
#[derive(Debug, Clone)]
pub struct LengthStats {
    /// Answer length per record, in corpus order.
    pub lengths: Vec<usize>,
    pub global: LengthSummary,
    /// Per-language summaries in first-observation order. Records without
    /// a `Language` field fall under [`UNKNOWN_LANGUAGE`].
    pub per_language: Vec<(String, LengthSummary)>,
    pub histogram: Histogram,
}

impl LengthStats {
    pub fn compute(corpus: &Corpus, upper_bounds: &[usize]) -> Self {
        let lengths: Vec<usize> = corpus.iter().map(|d| d.answer_len()).collect();

        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        for (document, &length) in corpus.iter().zip(&lengths) {
            let key = document
                .language()
                .map(|l| l.into_owned())
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());
            match slots.get(&key) {
                Some(&slot) => groups[slot].1.push(length),
                None => {
                    slots.insert(key.clone(), groups.len());
                    groups.push((key, vec![length]));
                }
            }
        }

        let per_language = groups
            .into_iter()
            .map(|(lang, group)| (lang, LengthSummary::from_lengths(&group)))
            .collect();

        Self {
            global: LengthSummary::from_lengths(&lengths),
            histogram: Histogram::build(&lengths, upper_bounds),
            per_language,
            lengths,
        }
    }
}
