use crate::domain::model::HistogramEntry;
use crate::utils::error::Result;
use regex::Regex;
use std::collections::HashMap;

/// Counts mentions of 20th- and 21st-century years (1900-2099). Results are
/// sorted by descending count, ties by ascending year, so output order is
/// stable.
pub struct YearHistogram {
    pattern: Regex,
}

impl YearHistogram {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b(?:19|20)\d{2}\b")?;
        Ok(Self { pattern })
    }

    pub fn count(&self, input: &str) -> Vec<HistogramEntry> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for m in self.pattern.find_iter(input) {
            *counts.entry(m.as_str()).or_insert(0) += 1;
        }

        let mut entries: Vec<HistogramEntry> = counts
            .into_iter()
            .map(|(value, count)| HistogramEntry {
                value: value.to_string(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        entries
    }
}
