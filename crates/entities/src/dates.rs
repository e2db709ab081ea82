//! Date span detection.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

// "May" alone is far more often the modal verb than the month.
const BARE_MONTH: &str =
    r"(?:January|February|March|April|June|July|August|September|October|November|December)";

const ORDINAL: &str = r"(?:st|nd|rd|th)?";

/// Alternatives are tried left to right at each position, so the more specific
/// forms come first.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives = [
        // 2024-01-31
        r"\b\d{4}-\d{1,2}-\d{1,2}\b".to_string(),
        // 31/01/2024, 01.31.24
        r"\b\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}\b".to_string(),
        // June 1, 2023 / Jan. 5th
        format!(r"\b{MONTH}\.?\s+\d{{1,2}}{ORDINAL}(?:,?\s+\d{{4}})?\b"),
        // 1 June 2023 / 5th of March
        format!(r"\b\d{{1,2}}{ORDINAL}\s+(?:of\s+)?{MONTH}\.?(?:,?\s+\d{{4}})?\b"),
        // June 2023
        format!(r"\b{MONTH}\.?,?\s+\d{{4}}\b"),
        format!(r"\b{BARE_MONTH}\b"),
        r"\b(?:Mon|Tues|Wednes|Thurs|Fri|Satur|Sun)day\b".to_string(),
        r"\b(?:[Tt]oday|[Yy]esterday|[Tt]omorrow)\b".to_string(),
        // 1999, 2020s
        r"\b(?:19|20)\d{2}s?\b".to_string(),
    ];
    Regex::new(&alternatives.join("|")).expect("date pattern is valid")
});

/// Non-overlapping date spans as byte ranges, in document order.
pub(crate) fn find_dates(text: &str) -> Vec<(usize, usize)> {
    DATE_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect()
}
