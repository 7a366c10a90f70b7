use chrono::{Local, NaiveDate};

/// Source of "today" for the no-future-dates rules and the end-date autofill.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine running the session.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned date, set through `RESUME_TODAY` or used by tests.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_after_seed_dates() {
        let floor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(SystemClock.today() > floor);
    }
}
