//! Preview renderer, a pure projection of the resume record.
//!
//! `project` builds a display-ready `PreviewDocument` with the fixed section
//! order; the renderers only lay it out. Nothing here can mutate the record.

pub mod html;
pub mod text;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Employment, EmploymentPeriod, ResumeRecord, RichText, UnknownVariant};

const MONTH_YEAR_FORMAT: &str = "%b %Y";

// ────────────────────────────────────────────────────────────────────────────
// View model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDocument {
    pub header: HeaderView,
    pub about: String,
    pub employment: Vec<EmploymentView>,
    pub education: Vec<EducationView>,
    pub contact: ContactView,
    pub skills: Vec<String>,
    pub certificates: Vec<CertificateView>,
    pub languages: Vec<LanguageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmploymentView {
    /// "<title> at <company>"
    pub heading: String,
    pub dates: String,
    /// Trusted markup, rendered as-is.
    pub description: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub degree: String,
    /// "<school>, <start> - <end>"
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub location: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateView {
    pub name: String,
    /// "<month>/<year>"
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageView {
    pub name: String,
    pub proficiency: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Projection
// ────────────────────────────────────────────────────────────────────────────

pub fn project(record: &ResumeRecord) -> PreviewDocument {
    let personal = &record.personal_details;
    PreviewDocument {
        header: HeaderView {
            name: personal.name.clone(),
            job_title: personal.job_title.clone(),
        },
        about: personal.summary.clone(),
        employment: record
            .employments
            .iter()
            .map(|job| EmploymentView {
                heading: format!("{} at {}", job.job_title, job.company_name),
                dates: employment_dates(job),
                description: job.description.clone(),
            })
            .collect(),
        education: record
            .educations
            .iter()
            .map(|edu| EducationView {
                degree: edu.degree.clone(),
                detail: format!("{}, {} - {}", edu.school_name, edu.start_year, edu.end_year),
            })
            .collect(),
        contact: ContactView {
            location: format!("{}, {}", personal.city, personal.country),
            phone: personal.phone.clone(),
            email: personal.email.clone(),
        },
        skills: record
            .technical_skills
            .iter()
            .map(|skill| format!("{} - {}", skill.name, skill.level))
            .collect(),
        certificates: record
            .certificates
            .iter()
            .map(|cert| CertificateView {
                name: cert.name.clone(),
                date: format!("{}/{}", cert.month, cert.year),
                description: cert.description.clone(),
            })
            .collect(),
        languages: record
            .languages
            .iter()
            .map(|lang| LanguageView {
                name: lang.name.clone(),
                proficiency: lang.proficiency.to_string(),
            })
            .collect(),
    }
}

/// "Jun 2020 - Present" or "Jan 2018 - May 2020".
fn employment_dates(job: &Employment) -> String {
    let start = month_year(job.start_date);
    match job.period {
        EmploymentPeriod::Ongoing => format!("{start} - Present"),
        EmploymentPeriod::Ended { end_date } => format!("{start} - {}", month_year(end_date)),
    }
}

fn month_year(date: NaiveDate) -> String {
    date.format(MONTH_YEAR_FORMAT).to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Output formats
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl PreviewFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewFormat::Text => "text",
            PreviewFormat::Html => "html",
            PreviewFormat::Json => "json",
        }
    }
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(PreviewFormat::Text),
            "html" => Ok(PreviewFormat::Html),
            "json" => Ok(PreviewFormat::Json),
            _ => Err(UnknownVariant::new(s, "text, html, json")),
        }
    }
}

pub fn render(doc: &PreviewDocument, format: PreviewFormat) -> Result<String, serde_json::Error> {
    match format {
        PreviewFormat::Text => Ok(text::render_text(doc)),
        PreviewFormat::Html => Ok(html::render_html(doc)),
        PreviewFormat::Json => serde_json::to_string_pretty(doc),
    }
}
