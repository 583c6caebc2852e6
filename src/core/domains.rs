use crate::utils::error::Result;
use regex::Regex;

/// Pulls the domain component out of every http(s) URL in a block of text,
/// in order of appearance. Duplicates are reported as often as they occur.
pub struct DomainExtractor {
    pattern: Regex,
}

impl DomainExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(https?://)(www\.)?(?P<domain>[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6})(?P<path>/[-a-zA-Z0-9@:%_/+.~#?&=]*)?",
        )?;
        Ok(Self { pattern })
    }

    pub fn extract(&self, input: &str) -> Vec<String> {
        self.pattern
            .captures_iter(input)
            .filter_map(|caps| caps.name("domain"))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
