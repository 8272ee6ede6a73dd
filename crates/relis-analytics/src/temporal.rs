//! Publication date range over records with a parseable `Published` field.

use chrono::NaiveDate;
use tracing::debug;

use crate::corpus::Corpus;
use crate::date::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
    /// Records that contributed a date.
    pub dated: usize,
}

/// Earliest and latest parseable publication date. `None` when no record
/// has a valid `DD.MM.YYYY` date; undated records are skipped, never defaulted.
pub fn date_range(corpus: &Corpus) -> Option<DateRange> {
    let dates: Vec<NaiveDate> = corpus
        .iter()
        .filter_map(|d| parse_date(d.published().unwrap_or("")))
        .collect();

    let skipped = corpus.len() - dates.len();
    if skipped > 0 {
        debug!("{} records without a parseable publication date", skipped);
    }

    let earliest = *dates.iter().min()?;
    let latest = *dates.iter().max()?;
    Some(DateRange {
        earliest,
        latest,
        dated: dates.len(),
    })
}
