//! Language field distribution.
//!
//! Records without a `Language` field are left out entirely here. The
//! length engine buckets them under "unknown" instead; the two analyzers
//! intentionally disagree on this.

use std::collections::HashMap;

use crate::corpus::Corpus;

/// Counts per observed `Language` value, in first-observation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDistribution {
    counts: Vec<(String, usize)>,
}

impl LanguageDistribution {
    pub fn compute(corpus: &Corpus) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for language in corpus.iter().filter_map(|d| d.language()) {
            match slots.get(&*language) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(language.to_string(), counts.len());
                    counts.push((language.into_owned(), 1));
                }
            }
        }

        Self { counts }
    }

    /// Number of distinct language values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of records that carried a `Language` field.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn count(&self, language: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, c)| (l.as_str(), *c))
    }
}
