use crate::utils::error::Result;
use regex::Regex;

/// Finds every line made up entirely of ASCII digits, in file order.
pub struct DigitLines {
    pattern: Regex,
}

impl DigitLines {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(?m)^[0-9]+$")?;
        Ok(Self { pattern })
    }

    pub fn extract(&self, input: &str) -> Vec<String> {
        self.pattern
            .find_iter(input)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
