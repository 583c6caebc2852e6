use crate::utils::error::Result;
use regex::Regex;

/// Rewrites the first day/month/year date in a string to month/day/year,
/// keeping the delimiter. The delimiter (space, slash, or dash) must be the
/// same on both sides of the month; the regex crate has no backreferences,
/// so the equality check happens on the captures and a candidate with mixed
/// delimiters is skipped. Calendar validity is not checked.
pub struct DateReorder {
    pattern: Regex,
}

impl DateReorder {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b(0?[1-9]|[12]\d|3[01])([ /-])(0?[1-9]|1[012])([ /-])(\d{4})")?;
        Ok(Self { pattern })
    }

    /// Returns the rewritten string and whether a rewrite happened.
    pub fn reorder(&self, input: &str) -> (String, bool) {
        for caps in self.pattern.captures_iter(input) {
            let (day, delim, month, second_delim, year) =
                (&caps[1], &caps[2], &caps[3], &caps[4], &caps[5]);
            if delim != second_delim {
                continue;
            }

            let whole = caps.get(0).expect("group 0 always present");
            let mut rewritten = String::with_capacity(input.len());
            rewritten.push_str(&input[..whole.start()]);
            rewritten.push_str(month);
            rewritten.push_str(delim);
            rewritten.push_str(day);
            rewritten.push_str(delim);
            rewritten.push_str(year);
            rewritten.push_str(&input[whole.end()..]);
            return (rewritten, true);
        }

        (input.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reorder(input: &str) -> (String, bool) {
        DateReorder::new().unwrap().reorder(input)
    }

    #[test]
    fn test_reorders_slash_date() {
        let (out, replaced) = reorder("Today's date is 18/09/2017");
        assert!(replaced);
        assert_eq!(out, "Today's date is 09/18/2017");
    }

    #[test]
    fn test_reorders_dash_and_space_dates() {
        assert_eq!(reorder("due 31-12-1999").0, "due 12-31-1999");
        assert_eq!(reorder("born 7 4 1776 here").0, "born 4 7 1776 here");
    }

    #[test]
    fn test_skips_mismatched_delimiters() {
        let (out, replaced) = reorder("18/09-2017");
        assert!(!replaced);
        assert_eq!(out, "18/09-2017");
    }

    #[test]
    fn test_date_after_mismatched_candidate_is_still_found() {
        let (out, replaced) = reorder("18/09-2017, then 25/12/2017");
        assert!(replaced);
        assert_eq!(out, "18/09-2017, then 12/25/2017");
    }

    #[test]
    fn test_digit_runs_inside_mismatched_candidate_cannot_start_a_date() {
        // The runs following a mismatched candidate have no word boundary
        // to anchor a new day, so nothing qualifies for a rewrite
        let (out, replaced) = reorder("1/2 2017/3/2018");
        assert!(!replaced);
        assert_eq!(out, "1/2 2017/3/2018");
    }

    #[test]
    fn test_rewrites_only_first_date() {
        let (out, _) = reorder("18/09/2017 and 25/12/2017");
        assert_eq!(out, "09/18/2017 and 25/12/2017");
    }

    #[test]
    fn test_no_calendar_validation() {
        // Day 31 in February still reorders
        assert_eq!(reorder("31/02/2020").0, "02/31/2020");
    }

    #[test]
    fn test_ignores_impossible_components() {
        // 32 is not a valid day capture, 13 not a valid month capture
        assert!(!reorder("32/09/2017").1);
        assert!(!reorder("18/13/2017").1);
    }
}
