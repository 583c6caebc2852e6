use serde::{Deserialize, Serialize};

/// How a tool run is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Which tool a run dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Email,
    Date,
    Css,
    Digits,
    Domains,
    Years,
}

/// Where a run's input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(String),
}

/// Typed result of a single tool run, one variant per result shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolReport {
    /// Email predicate: did the input match?
    Predicate { input: String, accepted: bool },

    /// Date reorder and comment splitter: rewritten text.
    Rewrite { output: String, replaced: bool },

    /// Digit lines and domain names: ordered list of matches.
    Matches { matches: Vec<String> },

    /// Year counts, sorted by descending count then ascending year.
    Histogram { entries: Vec<HistogramEntry> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistogramEntry {
    pub value: String,
    pub count: usize,
}

impl ToolReport {
    /// Number of matches the run produced, for logging.
    pub fn match_count(&self) -> usize {
        match self {
            ToolReport::Predicate { accepted, .. } => usize::from(*accepted),
            ToolReport::Rewrite { replaced, .. } => usize::from(*replaced),
            ToolReport::Matches { matches } => matches.len(),
            ToolReport::Histogram { entries } => entries.iter().map(|e| e.count).sum(),
        }
    }
}
