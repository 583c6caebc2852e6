use crate::utils::error::Result;
use regex::Regex;

/// Accepts strings shaped like `local@host.tld`: no whitespace, exactly one
/// `@`, and a final dot followed by 2-6 word characters. This is a shape
/// check, not RFC 5322 validation.
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.\w{2,6}$")?;
        Ok(Self { pattern })
    }

    pub fn is_valid(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}
