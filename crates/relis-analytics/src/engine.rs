//! Runs every analyzer over one loaded corpus.

use tracing::info;

use relis_core::{AnalyticsConfig, Result};

use crate::corpus::{Corpus, Document};
use crate::exemplar::{self, Exemplar, NearMeanOutcome};
use crate::language::LanguageDistribution;
use crate::length::LengthStats;
use crate::temporal::{self, DateRange};

/// Everything the report prints, borrowed from the corpus it describes.
#[derive(Debug, Clone)]
pub struct AnalyticsReport<'a> {
    pub total_documents: usize,
    pub languages: LanguageDistribution,
    /// Language dumped verbatim and its matching records, if configured.
    pub inspected: Option<(String, Vec<&'a Document>)>,
    pub lengths: LengthStats,
    pub shortest: Vec<Exemplar<'a>>,
    pub near_mean: NearMeanOutcome<'a>,
    pub near_mean_index: usize,
    pub date_range: Option<DateRange>,
}

/// Analyze a corpus. Fails only on an invalid configuration.
pub fn analyze<'a>(corpus: &'a Corpus, config: &AnalyticsConfig) -> Result<AnalyticsReport<'a>> {
    config.validate()?;

    let languages = LanguageDistribution::compute(corpus);

    let inspected = config.inspect_language.as_ref().map(|lang| {
        let matching: Vec<&Document> = corpus
            .iter()
            .filter(|d| d.language().as_deref() == Some(lang.as_str()))
            .collect();
        (lang.clone(), matching)
    });

    let lengths = LengthStats::compute(corpus, &config.bin_upper_bounds);
    let shortest = exemplar::shortest(corpus, config.shortest_k);
    let near_mean = exemplar::near_mean_below(corpus, lengths.global.mean, config.near_mean_index);
    let date_range = temporal::date_range(corpus);

    info!(
        "Analyzed {} documents: {} languages, mean answer length {:.2}",
        corpus.len(),
        languages.distinct(),
        lengths.global.mean
    );

    Ok(AnalyticsReport {
        total_documents: corpus.len(),
        languages,
        inspected,
        lengths,
        shortest,
        near_mean,
        near_mean_index: config.near_mean_index,
        date_range,
    })
}
