use crate::country::CountryCode;
use crate::model::ContributorRecord;
use crate::resolve::resolve;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contributors per country, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCounts(IndexMap<CountryCode, u64>);

impl CountryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, code: CountryCode) {
        *self.0.entry(code).or_insert(0) += 1;
    }

    pub fn get(&self, code: &CountryCode) -> u64 {
        self.0.get(code).copied().unwrap_or(0)
    }

    /// Count for a raw identifier such as a map shape id. Anything that is
    /// not a valid code counts as zero.
    pub fn get_str(&self, code: &str) -> u64 {
        CountryCode::new(code).map(|c| self.get(&c)).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest count, or 1 when empty so it is always a safe divisor.
    pub fn max_count(&self) -> u64 {
        self.0.values().copied().max().unwrap_or(1)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &u64)> {
        self.0.iter()
    }

    /// Countries by descending count; equal counts keep insertion order.
    pub fn ranked(&self) -> Vec<(CountryCode, u64)> {
        let mut ranked: Vec<(CountryCode, u64)> =
            self.0.iter().map(|(code, count)| (*code, *count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<(CountryCode, u64)> for CountryCounts {
    fn from_iter<I: IntoIterator<Item = (CountryCode, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolve every record and count contributors per country. Records whose
/// location cannot be resolved are skipped.
pub fn aggregate(records: &[ContributorRecord]) -> CountryCounts {
    let mut counts = CountryCounts::new();
    for code in records
        .iter()
        .filter_map(|record| resolve(record.location.as_deref()))
    {
        counts.increment(code);
    }
    counts
}
