//! Date input parsing for the CLI.

use chrono::NaiveDate;
use planner_core::event::parse_iso_date;

/// Parse a date typed by the user: `YYYY-MM-DD` or natural language
/// such as "tomorrow" or "next friday".
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    parse_iso_date(input).or_else(|| {
        fuzzydate::parse(&expand_abbreviations(input))
            .ok()
            .map(|dt| dt.date())
    })
}

/// Spell out day and month abbreviations ("next fri", "sept 3") for fuzzydate.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map_or_else(|| word.to_string(), |(_, full)| full.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2026-03-20"),
            NaiveDate::from_ymd_opt(2026, 3, 20)
        );
        assert_eq!(
            parse_date(" 2026-12-01 "),
            NaiveDate::from_ymd_opt(2026, 12, 1)
        );
    }

    #[test]
    fn empty_input_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
    }

    #[test]
    fn abbreviations_are_spelled_out() {
        assert_eq!(expand_abbreviations("next tue"), "next tuesday");
        assert_eq!(expand_abbreviations("Fri"), "friday");
        assert_eq!(expand_abbreviations("sept  3"), "september 3");
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_date("not a date at all xyz"), None);
    }
}
