//! RELIS Analytics: descriptive statistics over a JSONL question/answer corpus.
//!
//! Loads the corpus once, then runs independent analyzers over it: language
//! distribution, answer-length statistics and histogram, exemplar selection
//! and publication date range. `report` renders the results as plain text.

pub mod corpus;
pub mod date;
pub mod engine;
pub mod exemplar;
pub mod json;
pub mod language;
pub mod length;
pub mod report;
pub mod temporal;

pub use corpus::{Corpus, Document};
pub use engine::{analyze, AnalyticsReport};
pub use exemplar::{Exemplar, NearMeanOutcome};
pub use language::LanguageDistribution;
pub use length::{Histogram, HistogramBin, LengthStats, LengthSummary};
pub use report::render;
pub use temporal::DateRange;
