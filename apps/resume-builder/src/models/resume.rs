use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::rich_text::RichText;
use crate::models::section::SectionUpdate;

/// Returned when text does not name a member of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not one of: {expected}")]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static str,
}

impl UnknownVariant {
    pub fn new(value: &str, expected: &'static str) -> Self {
        Self {
            value: value.to_string(),
            expected,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Closed enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match. No coercion of near misses.
impl FromStr for SkillLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownVariant::new(s, "Beginner, Intermediate, Advanced, Expert"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl Proficiency {
    pub const ALL: [Proficiency; 4] = [
        Proficiency::Basic,
        Proficiency::Conversational,
        Proficiency::Fluent,
        Proficiency::Native,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Basic => "Basic",
            Proficiency::Conversational => "Conversational",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Proficiency::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant::new(s, "Basic, Conversational, Fluent, Native"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section element types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub job_title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

/// Whether a job is still held. An ongoing job has no end date at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum EmploymentPeriod {
    Ongoing,
    #[serde(rename_all = "camelCase")]
    Ended { end_date: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub job_title: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub period: EmploymentPeriod,
    pub description: RichText,
}

impl Employment {
    pub fn currently_employed(&self) -> bool {
        matches!(self.period, EmploymentPeriod::Ongoing)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        match self.period {
            EmploymentPeriod::Ongoing => None,
            EmploymentPeriod::Ended { end_date } => Some(end_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school_name: String,
    pub degree: String,
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    /// 1 = January.
    pub month: u32,
    pub year: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: Proficiency,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate root
// ────────────────────────────────────────────────────────────────────────────

/// The single active resume document.
///
/// Every section sits behind its own `Arc`: replacing one section produces a
/// record whose siblings are pointer-equal to the previous record's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_details: Arc<PersonalDetails>,
    pub technical_skills: Arc<Vec<Skill>>,
    pub employments: Arc<Vec<Employment>>,
    pub educations: Arc<Vec<Education>>,
    pub certificates: Arc<Vec<Certificate>>,
    pub languages: Arc<Vec<Language>>,
}

impl ResumeRecord {
    /// Returns a new record with exactly one section replaced wholesale.
    pub fn with_section(&self, update: SectionUpdate) -> ResumeRecord {
        let mut next = self.clone();
        match update {
            SectionUpdate::PersonalDetails(v) => next.personal_details = Arc::new(v),
            SectionUpdate::Skills(v) => next.technical_skills = Arc::new(v),
            SectionUpdate::Employment(v) => next.employments = Arc::new(v),
            SectionUpdate::Education(v) => next.educations = Arc::new(v),
            SectionUpdate::Certificates(v) => next.certificates = Arc::new(v),
            SectionUpdate::Languages(v) => next.languages = Arc::new(v),
        }
        next
    }

    /// True when the update carries exactly the value already held.
    pub fn holds(&self, update: &SectionUpdate) -> bool {
        match update {
            SectionUpdate::PersonalDetails(v) => *self.personal_details == *v,
            SectionUpdate::Skills(v) => *self.technical_skills == *v,
            SectionUpdate::Employment(v) => *self.employments == *v,
            SectionUpdate::Education(v) => *self.educations == *v,
            SectionUpdate::Certificates(v) => *self.certificates == *v,
            SectionUpdate::Languages(v) => *self.languages == *v,
        }
    }
}
