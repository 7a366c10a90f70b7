use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    Certificate, Education, Employment, Language, PersonalDetails, ResumeRecord, Skill,
    UnknownVariant,
};

/// The six independently edited slices of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    PersonalDetails,
    Skills,
    Employment,
    Education,
    Certificates,
    Languages,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::PersonalDetails,
        SectionKey::Skills,
        SectionKey::Employment,
        SectionKey::Education,
        SectionKey::Certificates,
        SectionKey::Languages,
    ];

    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::PersonalDetails => "personal",
            SectionKey::Skills => "skills",
            SectionKey::Employment => "employment",
            SectionKey::Education => "education",
            SectionKey::Certificates => "certificates",
            SectionKey::Languages => "languages",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::PersonalDetails => "Personal Details",
            SectionKey::Skills => "Technical Skills",
            SectionKey::Employment => "Employment History",
            SectionKey::Education => "Education",
            SectionKey::Certificates => "Certificates",
            SectionKey::Languages => "Languages",
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, SectionKey::PersonalDetails)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "personal" | "personaldetails" | "details" => SectionKey::PersonalDetails,
            "skills" | "skill" | "technicalskills" => SectionKey::Skills,
            "employment" | "employments" | "jobs" | "job" => SectionKey::Employment,
            "education" | "educations" => SectionKey::Education,
            "certificates" | "certificate" | "certs" => SectionKey::Certificates,
            "languages" | "language" => SectionKey::Languages,
            _ => {
                return Err(UnknownVariant::new(
                    s,
                    "personal, skills, employment, education, certificates, languages",
                ))
            }
        };
        Ok(key)
    }
}

/// A complete, validated value for one section, tagged with its section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    PersonalDetails(PersonalDetails),
    Skills(Vec<Skill>),
    Employment(Vec<Employment>),
    Education(Vec<Education>),
    Certificates(Vec<Certificate>),
    Languages(Vec<Language>),
}

impl SectionUpdate {
    pub fn key(&self) -> SectionKey {
        match self {
            SectionUpdate::PersonalDetails(_) => SectionKey::PersonalDetails,
            SectionUpdate::Skills(_) => SectionKey::Skills,
            SectionUpdate::Employment(_) => SectionKey::Employment,
            SectionUpdate::Education(_) => SectionKey::Education,
            SectionUpdate::Certificates(_) => SectionKey::Certificates,
            SectionUpdate::Languages(_) => SectionKey::Languages,
        }
    }

    /// Entry count; the personal details record counts as one.
    pub fn len(&self) -> usize {
        match self {
            SectionUpdate::PersonalDetails(_) => 1,
            SectionUpdate::Skills(v) => v.len(),
            SectionUpdate::Employment(v) => v.len(),
            SectionUpdate::Education(v) => v.len(),
            SectionUpdate::Certificates(v) => v.len(),
            SectionUpdate::Languages(v) => v.len(),
        }
    }
}

/// Ties a section key to the concrete type of its value.
pub trait Section: 'static {
    const KEY: SectionKey;
    type Value: Clone + PartialEq + fmt::Debug;

    fn select(record: &ResumeRecord) -> &Self::Value;
    fn into_update(value: Self::Value) -> SectionUpdate;
}

pub struct PersonalDetailsSection;
pub struct SkillsSection;
pub struct EmploymentSection;
pub struct EducationSection;
pub struct CertificatesSection;
pub struct LanguagesSection;

impl Section for PersonalDetailsSection {
    const KEY: SectionKey = SectionKey::PersonalDetails;
    type Value = PersonalDetails;

    fn select(record: &ResumeRecord) -> &PersonalDetails {
        &record.personal_details
    }

    fn into_update(value: PersonalDetails) -> SectionUpdate {
        SectionUpdate::PersonalDetails(value)
    }
}

impl Section for SkillsSection {
    const KEY: SectionKey = SectionKey::Skills;
    type Value = Vec<Skill>;

    fn select(record: &ResumeRecord) -> &Vec<Skill> {
        &record.technical_skills
    }

    fn into_update(value: Vec<Skill>) -> SectionUpdate {
        SectionUpdate::Skills(value)
    }
}

impl Section for EmploymentSection {
    const KEY: SectionKey = SectionKey::Employment;
    type Value = Vec<Employment>;

    fn select(record: &ResumeRecord) -> &Vec<Employment> {
        &record.employments
    }

    fn into_update(value: Vec<Employment>) -> SectionUpdate {
        SectionUpdate::Employment(value)
    }
}

impl Section for EducationSection {
    const KEY: SectionKey = SectionKey::Education;
    type Value = Vec<Education>;

    fn select(record: &ResumeRecord) -> &Vec<Education> {
        &record.educations
    }

    fn into_update(value: Vec<Education>) -> SectionUpdate {
        SectionUpdate::Education(value)
    }
}

impl Section for CertificatesSection {
    const KEY: SectionKey = SectionKey::Certificates;
    type Value = Vec<Certificate>;

    fn select(record: &ResumeRecord) -> &Vec<Certificate> {
        &record.certificates
    }

    fn into_update(value: Vec<Certificate>) -> SectionUpdate {
        SectionUpdate::Certificates(value)
    }
}

impl Section for LanguagesSection {
    const KEY: SectionKey = SectionKey::Languages;
    type Value = Vec<Language>;

    fn select(record: &ResumeRecord) -> &Vec<Language> {
        &record.languages
    }

    fn into_update(value: Vec<Language>) -> SectionUpdate {
        SectionUpdate::Languages(value)
    }
}
