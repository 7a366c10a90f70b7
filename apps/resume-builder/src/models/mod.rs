pub mod resume;
pub mod rich_text;
pub mod section;

pub use resume::{
    Certificate, Education, Employment, EmploymentPeriod, Language, PersonalDetails,
    Proficiency, ResumeRecord, Skill, SkillLevel, UnknownVariant,
};
pub use rich_text::{escape_html, RichText};
pub use section::{
    CertificatesSection, EducationSection, EmploymentSection, LanguagesSection,
    PersonalDetailsSection, Section, SectionKey, SectionUpdate, SkillsSection,
};
