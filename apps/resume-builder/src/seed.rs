//! The example resume every session starts from.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::{
    Certificate, Education, Employment, EmploymentPeriod, Language, PersonalDetails,
    Proficiency, ResumeRecord, RichText, Skill, SkillLevel,
};

const SUMMARY: &str = "Results-driven Senior Frontend Developer with 5+ years of experience specializing in React and TypeScript.
Proven track record of leading engineering teams and delivering high-impact web applications.
Strong expertise in building accessible, performant, and scalable user interfaces.
Experienced in modern frontend architectures, state management, and responsive design patterns.
Passionate about mentoring developers and implementing best practices for code quality.";

const TECHCORP_DESCRIPTION: &str = "<p>
• Led and mentored a team of 6 frontend engineers, implementing agile methodologies and improving team velocity by 40%
• Architected and developed a modern SaaS platform using React, TypeScript, and GraphQL, serving 100k+ monthly active users
• Implemented comprehensive component library and design system, reducing development time by 60%
• Optimized application performance, achieving 30% improvement in load times and 95+ Lighthouse scores
• Established frontend testing practices, achieving 85% code coverage using Jest and React Testing Library</p>";

const WEBWORKS_DESCRIPTION: &str = "<p>
• Developed and maintained responsive web applications using React, Redux, and TypeScript
• Improved web accessibility compliance to WCAG 2.1 AA standards, increasing accessibility score by 45%
• Reduced bundle size by 35% through code splitting and lazy loading implementation
• Collaborated with UX team to implement new design system, improving consistency across products
• Built reusable component library used across 3 different product lines</p>";

/// Builds a fresh copy of the example resume (Jane Doe).
pub fn example_resume() -> ResumeRecord {
    ResumeRecord {
        personal_details: Arc::new(PersonalDetails {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+1 555-1234".to_string(),
            country: "USA".to_string(),
            city: "New York".to_string(),
            address: "123 Main St, Apt 4B".to_string(),
            job_title: "Senior Frontend Developer".to_string(),
            summary: SUMMARY.to_string(),
        }),
        technical_skills: Arc::new(vec![
            skill("React", SkillLevel::Expert),
            skill("TypeScript", SkillLevel::Advanced),
            skill("Node.js", SkillLevel::Advanced),
            skill("CSS", SkillLevel::Expert),
            skill("GraphQL", SkillLevel::Intermediate),
        ]),
        employments: Arc::new(vec![
            Employment {
                job_title: "Senior Frontend Developer".to_string(),
                company_name: "TechCorp Inc".to_string(),
                start_date: ymd(2020, 6, 1),
                period: EmploymentPeriod::Ongoing,
                description: RichText::new(TECHCORP_DESCRIPTION),
            },
            Employment {
                job_title: "Frontend Engineer".to_string(),
                company_name: "WebWorks LLC".to_string(),
                start_date: ymd(2018, 1, 1),
                period: EmploymentPeriod::Ended {
                    end_date: ymd(2020, 5, 31),
                },
                description: RichText::new(WEBWORKS_DESCRIPTION),
            },
        ]),
        educations: Arc::new(vec![Education {
            school_name: "University of Example".to_string(),
            degree: "B.S. in Computer Science".to_string(),
            start_year: 2014,
            end_year: 2018,
        }]),
        certificates: Arc::new(vec![
            Certificate {
                name: "AWS Certified Solutions Architect".to_string(),
                month: 5,
                year: 2021,
                description: "Demonstrated knowledge in designing scalable AWS solutions."
                    .to_string(),
            },
            Certificate {
                name: "Scrum Master Certification".to_string(),
                month: 9,
                year: 2019,
                description: "Showed expertise in agile methodologies and team leadership."
                    .to_string(),
            },
        ]),
        languages: Arc::new(vec![
            language("English", Proficiency::Native),
            language("Spanish", Proficiency::Fluent),
            language("French", Proficiency::Conversational),
        ]),
    }
}

fn skill(name: &str, level: SkillLevel) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn language(name: &str, proficiency: Proficiency) -> Language {
    Language {
        name: name.to_string(),
        proficiency,
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are real calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_non_empty() {
        let record = example_resume();
        assert_eq!(record.personal_details.name, "Jane Doe");
        assert_eq!(record.technical_skills.len(), 5);
        assert_eq!(record.employments.len(), 2);
        assert_eq!(record.educations.len(), 1);
        assert_eq!(record.certificates.len(), 2);
        assert_eq!(record.languages.len(), 3);
    }

    #[test]
    fn test_each_call_builds_independent_record() {
        let a = example_resume();
        let b = example_resume();
        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(&a.technical_skills, &b.technical_skills));
    }
}
