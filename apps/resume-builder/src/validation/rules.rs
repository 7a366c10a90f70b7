//! Constraint primitives shared by every section.
//!
//! Each rule takes the raw working-state text and returns either the parsed
//! value or the message shown next to the field.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::RuleContext;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_ADDRESS_CHARS: usize = 5;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_YEAR: i32 = 1900;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-.]{5,}$").expect("valid phone regex"));

/// Length in characters, not bytes. No trimming.
pub fn min_chars(value: &str, min: usize, label: &str) -> Result<String, String> {
    if value.chars().count() < min {
        return Err(format!("{label} must be at least {min} characters."));
    }
    Ok(value.to_string())
}

/// Exact member of a closed set; anything else is rejected, never coerced.
pub fn one_of<E: FromStr>(value: &str, label: &str, choices: &str) -> Result<E, String> {
    value
        .parse::<E>()
        .map_err(|_| format!("{label} must be one of: {choices}."))
}

/// A whole year in `[MIN_YEAR, current year]`.
pub fn year(value: &str, label: &str, ctx: &RuleContext) -> Result<i32, String> {
    let year = value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("{label} must be a whole number."))?;
    if year < MIN_YEAR {
        return Err(format!("{label} must be {MIN_YEAR} or later."));
    }
    if year > ctx.current_year() {
        return Err(format!("{label} cannot be in the future."));
    }
    Ok(year)
}

pub fn month(value: &str) -> Result<u32, String> {
    const MESSAGE: &str = "Month must be between 1 and 12.";
    let month = value
        .trim()
        .parse::<u32>()
        .map_err(|_| MESSAGE.to_string())?;
    if !(1..=12).contains(&month) {
        return Err(MESSAGE.to_string());
    }
    Ok(month)
}

/// Strict `YYYY-MM-DD`, a real calendar date, not after today.
pub fn date(value: &str, label: &str, ctx: &RuleContext) -> Result<NaiveDate, String> {
    if !DATE_RE.is_match(value) {
        return Err("Invalid date format. Use YYYY-MM-DD.".to_string());
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| format!("{label} is not a real calendar date."))?;
    if date.year() < MIN_YEAR {
        return Err(format!("{label} must be {MIN_YEAR} or later."));
    }
    if date > ctx.today {
        return Err(format!("{label} cannot be in the future."));
    }
    Ok(date)
}

pub fn email(value: &str) -> Result<String, String> {
    if !EMAIL_RE.is_match(value) {
        return Err("Enter a valid email address.".to_string());
    }
    Ok(value.to_string())
}

pub fn phone(value: &str) -> Result<String, String> {
    if !PHONE_RE.is_match(value) {
        return Err("Enter a valid phone number.".to_string());
    }
    Ok(value.to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
    }

    #[test]
    fn test_min_chars_counts_characters() {
        assert!(min_chars("R", 2, "Skill name").is_err());
        assert!(min_chars("Go", 2, "Skill name").is_ok());
        assert!(min_chars("é", 2, "Skill name").is_err(), "two bytes, one char");
        assert_eq!(
            min_chars("", 2, "Skill name").unwrap_err(),
            "Skill name must be at least 2 characters."
        );
    }

    #[test]
    fn test_one_of_rejects_out_of_set() {
        let ok: Result<SkillLevel, _> = one_of("Advanced", "Skill level", "…");
        assert_eq!(ok, Ok(SkillLevel::Advanced));
        let bad: Result<SkillLevel, _> = one_of("advanced", "Skill level", "…");
        assert!(bad.is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year("2014", "Start year", &ctx()), Ok(2014));
        assert_eq!(year(" 2025 ", "Start year", &ctx()), Ok(2025));
        assert_eq!(
            year("1899", "Start year", &ctx()).unwrap_err(),
            "Start year must be 1900 or later."
        );
        assert_eq!(
            year("3000", "Start year", &ctx()).unwrap_err(),
            "Start year cannot be in the future."
        );
        assert_eq!(
            year("abc", "Start year", &ctx()).unwrap_err(),
            "Start year must be a whole number."
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month("1"), Ok(1));
        assert_eq!(month("12"), Ok(12));
        assert!(month("0").is_err());
        assert_eq!(month("13").unwrap_err(), "Month must be between 1 and 12.");
        assert!(month("-1").is_err());
    }

    #[test]
    fn test_date_requires_strict_pattern() {
        assert!(date("2020-06-01", "Start date", &ctx()).is_ok());
        assert!(date("2020-6-1", "Start date", &ctx()).is_err());
        assert!(date("06/01/2020", "Start date", &ctx()).is_err());
        assert!(date(" 2020-06-01", "Start date", &ctx()).is_err());
        assert_eq!(
            date("２０２０-06-01", "Start date", &ctx()).unwrap_err(),
            "Invalid date format. Use YYYY-MM-DD.",
            "full-width digits are not ASCII digits"
        );
        assert_eq!(
            date("", "Start date", &ctx()).unwrap_err(),
            "Invalid date format. Use YYYY-MM-DD."
        );
    }

    #[test]
    fn test_date_rejects_impossible_and_future_dates() {
        assert_eq!(
            date("2021-02-30", "End date", &ctx()).unwrap_err(),
            "End date is not a real calendar date."
        );
        assert!(date("2025-03-15", "End date", &ctx()).is_ok(), "today is allowed");
        assert_eq!(
            date("2025-03-16", "End date", &ctx()).unwrap_err(),
            "End date cannot be in the future."
        );
        assert!(date("1850-01-01", "End date", &ctx()).is_err());
    }

    #[test]
    fn test_email_and_phone() {
        assert!(email("jane.doe@example.com").is_ok());
        assert!(email("jane.doe@example").is_err());
        assert!(email("jane doe@example.com").is_err());
        assert!(phone("+1 555-1234").is_ok());
        assert!(phone("(555) 123.4567").is_ok());
        assert!(phone("call me").is_err());
        assert!(phone("123").is_err());
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_date(d), "2024-01-09");
    }
}
