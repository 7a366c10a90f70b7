use crate::editor::{FieldName, ListSection};
use crate::models::{Education, EducationSection};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub school_name: String,
    pub degree: String,
    pub start_year: String,
    pub end_year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    SchoolName,
    Degree,
    StartYear,
    EndYear,
}

impl FieldName for EducationField {
    const ALL: &'static [Self] = &[
        EducationField::SchoolName,
        EducationField::Degree,
        EducationField::StartYear,
        EducationField::EndYear,
    ];

    fn name(self) -> &'static str {
        match self {
            EducationField::SchoolName => "schoolName",
            EducationField::Degree => "degree",
            EducationField::StartYear => "startYear",
            EducationField::EndYear => "endYear",
        }
    }
}

impl ListSection for EducationSection {
    type Item = Education;
    type Draft = EducationDraft;
    type Field = EducationField;

    const MIN_ENTRIES: usize = 1;
    const TOO_FEW_MESSAGE: &'static str = "At least one education entry is required.";

    fn blank(ctx: &RuleContext) -> EducationDraft {
        let year = ctx.current_year().to_string();
        EducationDraft {
            school_name: String::new(),
            degree: String::new(),
            start_year: year.clone(),
            end_year: year,
        }
    }

    fn draft(item: &Education) -> EducationDraft {
        EducationDraft {
            school_name: item.school_name.clone(),
            degree: item.degree.clone(),
            start_year: item.start_year.to_string(),
            end_year: item.end_year.to_string(),
        }
    }

    fn edit(
        draft: &mut EducationDraft,
        field: EducationField,
        value: &str,
        _ctx: &RuleContext,
    ) -> Result<(), String> {
        let slot = match field {
            EducationField::SchoolName => &mut draft.school_name,
            EducationField::Degree => &mut draft.degree,
            EducationField::StartYear => &mut draft.start_year,
            EducationField::EndYear => &mut draft.end_year,
        };
        *slot = value.to_string();
        Ok(())
    }

    fn parse(
        index: usize,
        draft: &EducationDraft,
        ctx: &RuleContext,
    ) -> Result<Education, Vec<FieldError>> {
        let mut sink = ErrorSink::entry(index);
        let school_name = sink.check(
            EducationField::SchoolName.name(),
            rules::min_chars(&draft.school_name, rules::MIN_NAME_CHARS, "School name"),
        );
        let degree = sink.check(
            EducationField::Degree.name(),
            rules::min_chars(&draft.degree, rules::MIN_NAME_CHARS, "Degree"),
        );
        let start_year = sink.check(
            EducationField::StartYear.name(),
            rules::year(&draft.start_year, "Start year", ctx),
        );
        let end_year = sink.check(
            EducationField::EndYear.name(),
            rules::year(&draft.end_year, "End year", ctx),
        );
        sink.finish(|| {
            Some(Education {
                school_name: school_name?,
                degree: degree?,
                start_year: start_year?,
                end_year: end_year?,
            })
        })
    }

    fn fields(draft: &EducationDraft) -> Vec<(&'static str, String)> {
        vec![
            (EducationField::SchoolName.name(), draft.school_name.clone()),
            (EducationField::Degree.name(), draft.degree.clone()),
            (EducationField::StartYear.name(), draft.start_year.clone()),
            (EducationField::EndYear.name(), draft.end_year.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;
    use crate::editor::{ListEditor, SectionEditor};
    use crate::seed::example_resume;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
    }

    fn draft() -> EducationDraft {
        EducationDraft {
            school_name: "MIT".to_string(),
            degree: "M.S.".to_string(),
            start_year: "2019".to_string(),
            end_year: "2021".to_string(),
        }
    }

    #[test]
    fn test_blank_education_uses_current_year() {
        let blank = EducationSection::blank(&ctx());
        assert_eq!(blank.start_year, "2025");
        assert_eq!(blank.end_year, "2025");
        let errors = EducationSection::parse(0, &blank, &ctx()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["schoolName", "degree"]);
    }

    #[test]
    fn test_future_start_year_rejected() {
        let mut d = draft();
        EducationSection::edit(&mut d, EducationField::StartYear, "3000", &ctx()).unwrap();
        let errors = EducationSection::parse(0, &d, &ctx()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "startYear");
        assert_eq!(errors[0].message, "Start year cannot be in the future.");
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        let mut d = draft();
        d.end_year = "soon".to_string();
        let errors = EducationSection::parse(0, &d, &ctx()).unwrap_err();
        assert_eq!(errors[0].message, "End year must be a whole number.");
    }

    #[test]
    fn test_parse_valid_education() {
        let education = EducationSection::parse(0, &draft(), &ctx()).unwrap();
        assert_eq!(education.start_year, 2019);
        assert_eq!(education.end_year, 2021);
    }

    #[test]
    fn test_removing_only_education_is_invalid() {
        let emitted: Rc<RefCell<Vec<Vec<Education>>>> = Rc::default();
        let sink = Rc::clone(&emitted);
        let mut editor = ListEditor::<EducationSection>::new(
            &example_resume().educations,
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())),
            move |schools| sink.borrow_mut().push(schools),
        );
        assert!(editor.status().is_valid());

        let status = editor.remove_at(0).unwrap();
        assert!(!status.is_valid());
        assert_eq!(
            status.errors()[0].to_string(),
            "section: At least one education entry is required."
        );
        assert!(emitted.borrow().is_empty());
    }
}
