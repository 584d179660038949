//! Month/year date normalization.
//!
//! ATS parsers fill employment dates most reliably from `MM/YYYY`. This
//! module rewrites every month/year expression in a line to that shape:
//!
//! - `03/23`, `3-2023`, `03.2023` become `03/2023`
//! - `Jan 2022`, `January, 2022` become `Jan/2022`, `January/2022`
//!
//! Numeric months are zero-padded and two-digit years get a `20` prefix.
//! Month names pass through unchanged. A dotted pair with a two-digit year
//! (`3.10`, `3.85`) reads as a version or decimal and is only rewritten when
//! the same line also carries a named month.

use regex::{Captures, Regex};

/// Rewrites month/year expressions to `month/year`.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    regex: Regex,
}

impl DateNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            regex: Regex::new(concat!(
                r"(?i)\b(?P<month>\d{1,2}",
                r"|jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?",
                r"|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)",
                r"(?P<sep>[ ,./-]{1,2})(?P<year>\d{4}|\d{2})\b",
            ))
            .expect("date pattern is valid"),
        }
    }

    /// Rewrite every date-like substring in `line`.
    pub fn normalize(&self, line: &str) -> String {
        self.normalize_counted(line).0
    }

    /// Rewrite every date-like substring and report how many were changed.
    pub fn normalize_counted(&self, line: &str) -> (String, usize) {
        let mut out = String::with_capacity(line.len());
        let mut last = 0;
        let mut rewrites = 0;
        let named_month = self.has_named_month(line);

        for caps in self.regex.captures_iter(line) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&line[last..whole.start()]);

            match rewrite(&caps, line, whole.start(), whole.end(), named_month) {
                Some(replacement) => {
                    if replacement != whole.as_str() {
                        rewrites += 1;
                    }
                    out.push_str(&replacement);
                }
                None => out.push_str(whole.as_str()),
            }
            last = whole.end();
        }

        out.push_str(&line[last..]);
        (out, rewrites)
    }

    fn has_named_month(&self, line: &str) -> bool {
        self.regex.captures_iter(line).any(|caps| {
            caps.name("month")
                .is_some_and(|m| m.as_str().as_bytes()[0].is_ascii_alphabetic())
        })
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the replacement for one match, or `None` to leave it untouched.
fn rewrite(
    caps: &Captures<'_>,
    line: &str,
    start: usize,
    end: usize,
    named_month: bool,
) -> Option<String> {
    let month = caps.name("month")?.as_str();
    let year = caps.name("year")?.as_str();

    if !month.as_bytes()[0].is_ascii_digit() {
        return Some(format!("{}/{}", month, year));
    }

    // 12/03/2023 or 2023-12-03: part of a day-level date, not month/year.
    if in_numeric_chain(line, start, end) {
        return None;
    }

    // Python 3.10, GPA 3.85
    if year.len() == 2 && caps.name("sep").map(|m| m.as_str()) == Some(".") && !named_month {
        return None;
    }

    let month_num: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month_num) {
        return None;
    }

    let year = if year.len() == 2 {
        format!("20{}", year)
    } else {
        year.to_string()
    };
    Some(format!("{:02}/{}", month_num, year))
}

fn is_chain_separator(b: u8) -> bool {
    matches!(b, b'/' | b'.' | b'-')
}

fn in_numeric_chain(line: &str, start: usize, end: usize) -> bool {
    let bytes = line.as_bytes();
    let before = start >= 2 && is_chain_separator(bytes[start - 1]) && bytes[start - 2].is_ascii_digit();
    let after = end + 1 < bytes.len() && is_chain_separator(bytes[end]) && bytes[end + 1].is_ascii_digit();
    before || after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(line: &str) -> String {
        DateNormalizer::new().normalize(line)
    }

    #[test]
    fn test_mixed_line() {
        assert_eq!(
            norm("Worked at Acme from Jan 2022 to 03/23"),
            "Worked at Acme from Jan/2022 to 03/2023"
        );
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(norm("3-2021"), "03/2021");
        assert_eq!(norm("11.2019 - 4/20"), "11/2019 - 04/2020");
        assert_eq!(norm("Since 7 2015"), "Since 07/2015");
    }

    #[test]
    fn test_month_names_pass_through() {
        assert_eq!(norm("September, 2020"), "September/2020");
        assert_eq!(norm("sept. 2021 – present"), "sept/2021 – present");
        assert_eq!(norm("Jan 22"), "Jan/22");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = DateNormalizer::new();
        for line in ["03/2023", "Jan/2022 - 11/2024", "Worked 2019"] {
            let once = normalizer.normalize(line);
            assert_eq!(normalizer.normalize(&once), once);
        }
        assert_eq!(normalizer.normalize_counted("03/2023").1, 0);
    }

    #[test]
    fn test_adversarial_numbers_untouched() {
        for line in [
            "Room 204-2023",
            "Increased revenue by 250%",
            "Ticket 12345-67",
            "12/03/2023",
            "2023-12-03",
            "Month 13/2020",
            "Phone 555-123-4567",
            "Mayor of Springfield 2020",
            "Python 3.10, GPA 3.85",
            "Rust 1.75 and Node 8.11",
        ] {
            assert_eq!(norm(line), line);
        }
    }

    #[test]
    fn test_dotted_short_year_next_to_named_month() {
        assert_eq!(norm("Jan 2020 - 4.21"), "Jan/2020 - 04/2021");
        assert_eq!(norm("3.2021"), "03/2021");
    }

    #[test]
    fn test_counts_rewrites() {
        let (out, n) = DateNormalizer::new().normalize_counted("Jan 2020 to 5/21 and 12/2022");
        assert_eq!(out, "Jan/2020 to 05/2021 and 12/2022");
        assert_eq!(n, 2);
    }
}
