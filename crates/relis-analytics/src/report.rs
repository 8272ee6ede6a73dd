//! Plain-text rendering of an [`AnalyticsReport`]. Formatting only; every
//! number is computed by the analyzers.

use std::fmt;

use crate::date::format_date;
use crate::engine::AnalyticsReport;
use crate::exemplar::NearMeanOutcome;
use crate::length::LengthSummary;

/// Render the report, sections in fixed order.
pub fn render(report: &AnalyticsReport<'_>) -> String {
    report.to_string()
}

/// Median as the reference report prints it: a whole number for odd
/// counts (and the empty list), always with a fraction for even counts.
pub fn format_median(summary: &LengthSummary) -> String {
    if summary.count > 0 && summary.count % 2 == 0 && summary.median.fract() == 0.0 {
        format!("{:.1}", summary.median)
    } else {
        format!("{}", summary.median)
    }
}

impl fmt::Display for AnalyticsReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &AnalyticsReport<'_>) -> fmt::Result {
    writeln!(out, "Total documents in the file: {}", report.total_documents)?;

    writeln!(out)?;
    writeln!(out, "Unique 'Language' values and their counts:")?;
    writeln!(out, "Total unique languages: {}", report.languages.distinct())?;
    if report.languages.distinct() == 0 {
        writeln!(out, "No 'Language' values found.")?;
    }
    for (language, count) in report.languages.iter() {
        writeln!(out, "{}: {}", language, count)?;
    }

    if let Some((language, documents)) = &report.inspected {
        writeln!(out)?;
        writeln!(out, "Document(s) with Language == '{}':", language)?;
        if documents.is_empty() {
            writeln!(out, "(none)")?;
        }
        for document in documents {
            writeln!(out, "{}", document.to_pretty_json())?;
        }
    }

    let global = &report.lengths.global;
    writeln!(out)?;
    writeln!(out, "Overall Answer Length Statistics:")?;
    writeln!(out, "Mean (average) answer length: {:.2} characters", global.mean)?;
    writeln!(out, "Median answer length: {} characters", format_median(global))?;

    writeln!(out)?;
    writeln!(out, "Per-language Answer Length Statistics:")?;
    writeln!(out, "{:<10} {:<6} {:<10} {:<10}", "Language", "Count", "Mean", "Median")?;
    for (language, summary) in &report.lengths.per_language {
        writeln!(
            out,
            "{:<10} {:<6} {:<10.2} {:<10}",
            language,
            summary.count,
            summary.mean,
            format_median(summary)
        )?;
    }

    let histogram = &report.lengths.histogram;
    writeln!(out)?;
    writeln!(out, "Answer Length Distribution:")?;
    for bin in histogram.bins() {
        writeln!(
            out,
            "{:<10}: {:>5} documents ({:>5.2}%)",
            bin.label,
            bin.count,
            histogram.percentage(bin)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} documents with the shortest 'Answer' fields:",
        report.shortest.len()
    )?;
    for (rank, exemplar) in report.shortest.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "Document {} (Answer length: {} characters):",
            rank + 1,
            exemplar.length
        )?;
        writeln!(out, "{}", exemplar.document.to_pretty_json())?;
    }

    writeln!(out)?;
    match &report.near_mean {
        NearMeanOutcome::Found(exemplar) => {
            writeln!(
                out,
                "Example document with an answer a little under the average length \
                 (rank {}, Answer length: {} characters):",
                report.near_mean_index, exemplar.length
            )?;
            writeln!(out, "{}", exemplar.document.to_pretty_json())?;
        }
        NearMeanOutcome::NoneBelowMean => {
            writeln!(
                out,
                "No exemplar available: no document has an answer shorter than the average length."
            )?;
        }
        NearMeanOutcome::OutOfRange { requested, available } => {
            writeln!(
                out,
                "No exemplar available: rank {} requested but only {} documents are below the average length.",
                requested, available
            )?;
        }
    }

    writeln!(out)?;
    match &report.date_range {
        Some(range) => {
            writeln!(out, "Publication Date Range:")?;
            writeln!(out, "Earliest: {}", format_date(range.earliest))?;
            writeln!(out, "Latest:   {}", format_date(range.latest))?;
        }
        None => writeln!(out, "No valid publication dates found.")?,
    }

    Ok(())
}
