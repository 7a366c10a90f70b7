//! Section validation: field-level errors and the two-state section status.
//!
//! A section is Valid only when every field of every entry passes its rule and
//! list-level bounds hold. Anything else is Invalid with the full error list.

pub mod rules;

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One failed constraint, addressed by entry position and field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Zero-based entry position; `None` for the personal details record and
    /// for list-level errors.
    pub entry: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    /// An error about the section as a whole, e.g. a list that is too short.
    pub fn section(message: impl Into<String>) -> Self {
        Self {
            entry: None,
            field: "section",
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(index) => write!(f, "#{} {}: {}", index + 1, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    Valid,
    Invalid { errors: Vec<FieldError> },
}

impl SectionStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, SectionStatus::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            SectionStatus::Valid => &[],
            SectionStatus::Invalid { errors } => errors,
        }
    }

    pub fn from_result<T>(result: &Result<T, Vec<FieldError>>) -> Self {
        match result {
            Ok(_) => SectionStatus::Valid,
            Err(errors) => SectionStatus::Invalid {
                errors: errors.clone(),
            },
        }
    }
}

/// Inputs to rules that depend on the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub today: NaiveDate,
}

impl RuleContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }

    pub fn current_month(&self) -> u32 {
        self.today.month()
    }
}

/// Collects field errors while one entry is parsed.
pub struct ErrorSink {
    entry: Option<usize>,
    errors: Vec<FieldError>,
}

impl ErrorSink {
    pub fn entry(index: usize) -> Self {
        Self {
            entry: Some(index),
            errors: Vec::new(),
        }
    }

    /// For single-record sections, where errors carry no position.
    pub fn record() -> Self {
        Self {
            entry: None,
            errors: Vec::new(),
        }
    }

    /// Records the error, if any, and hands back the parsed value otherwise.
    pub fn check<T>(&mut self, field: &'static str, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            entry: self.entry,
            field,
            message: message.into(),
        });
    }

    /// Builds the entry when no error was recorded.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, Vec<FieldError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}
