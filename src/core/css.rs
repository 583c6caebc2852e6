use crate::utils::error::Result;
use regex::Regex;

/// Expands single-line `/* ... */` comments to three lines: delimiter, body,
/// delimiter. The body match is lazy so adjacent comments on one line split
/// independently, and `.` does not cross line boundaries.
pub struct CommentSplitter {
    pattern: Regex,
}

impl CommentSplitter {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(/\*+)(.*?)(\*+/)")?;
        Ok(Self { pattern })
    }

    /// Returns the rewritten stylesheet and whether any comment was found.
    pub fn split(&self, input: &str) -> (String, bool) {
        let replaced = self.pattern.is_match(input);
        let output = self.pattern.replace_all(input, "$1\n$2\n$3").into_owned();
        (output, replaced)
    }
}
