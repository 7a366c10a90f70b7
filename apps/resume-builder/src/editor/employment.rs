//! Employment history entries.
//!
//! The end date belongs to the working copy even while "currently employed"
//! is ticked: it is hidden and unchecked, never committed, and comes back if
//! the box is cleared again.

use crate::editor::{FieldName, ListSection};
use crate::models::{Employment, EmploymentPeriod, EmploymentSection, RichText};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentDraft {
    pub job_title: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_employed: bool,
    /// Trusted markup.
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentField {
    JobTitle,
    CompanyName,
    StartDate,
    EndDate,
    CurrentlyEmployed,
    Description,
}

impl FieldName for EmploymentField {
    const ALL: &'static [Self] = &[
        EmploymentField::JobTitle,
        EmploymentField::CompanyName,
        EmploymentField::StartDate,
        EmploymentField::EndDate,
        EmploymentField::CurrentlyEmployed,
        EmploymentField::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            EmploymentField::JobTitle => "jobTitle",
            EmploymentField::CompanyName => "companyName",
            EmploymentField::StartDate => "startDate",
            EmploymentField::EndDate => "endDate",
            EmploymentField::CurrentlyEmployed => "currentlyEmployed",
            EmploymentField::Description => "description",
        }
    }
}

impl EmploymentDraft {
    /// Ticking suppresses the end date; clearing fills it with today when empty.
    pub fn set_currently_employed(&mut self, current: bool, ctx: &RuleContext) {
        self.currently_employed = current;
        if !current && self.end_date.trim().is_empty() {
            self.end_date = rules::format_date(ctx.today);
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        other => Err(format!("expected true or false, got '{other}'")),
    }
}

impl ListSection for EmploymentSection {
    type Item = Employment;
    type Draft = EmploymentDraft;
    type Field = EmploymentField;

    const MIN_ENTRIES: usize = 1;
    const TOO_FEW_MESSAGE: &'static str = "At least one employment entry is required.";

    fn blank(_ctx: &RuleContext) -> EmploymentDraft {
        EmploymentDraft {
            job_title: String::new(),
            company_name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            currently_employed: false,
            description: String::new(),
        }
    }

    fn draft(item: &Employment) -> EmploymentDraft {
        EmploymentDraft {
            job_title: item.job_title.clone(),
            company_name: item.company_name.clone(),
            start_date: rules::format_date(item.start_date),
            end_date: item.end_date().map(rules::format_date).unwrap_or_default(),
            currently_employed: item.currently_employed(),
            description: item.description.as_markup().to_string(),
        }
    }

    fn edit(
        draft: &mut EmploymentDraft,
        field: EmploymentField,
        value: &str,
        ctx: &RuleContext,
    ) -> Result<(), String> {
        match field {
            EmploymentField::JobTitle => draft.job_title = value.to_string(),
            EmploymentField::CompanyName => draft.company_name = value.to_string(),
            EmploymentField::StartDate => draft.start_date = value.to_string(),
            EmploymentField::EndDate => draft.end_date = value.to_string(),
            EmploymentField::CurrentlyEmployed => {
                draft.set_currently_employed(parse_flag(value)?, ctx)
            }
            EmploymentField::Description => draft.description = value.to_string(),
        }
        Ok(())
    }

    fn parse(
        index: usize,
        draft: &EmploymentDraft,
        ctx: &RuleContext,
    ) -> Result<Employment, Vec<FieldError>> {
        let mut sink = ErrorSink::entry(index);
        let job_title = sink.check(
            EmploymentField::JobTitle.name(),
            rules::min_chars(&draft.job_title, rules::MIN_NAME_CHARS, "Job title"),
        );
        let company_name = sink.check(
            EmploymentField::CompanyName.name(),
            rules::min_chars(&draft.company_name, rules::MIN_NAME_CHARS, "Company name"),
        );
        let start_date = sink.check(
            EmploymentField::StartDate.name(),
            rules::date(&draft.start_date, "Start date", ctx),
        );
        let period = if draft.currently_employed {
            Some(EmploymentPeriod::Ongoing)
        } else {
            sink.check(
                EmploymentField::EndDate.name(),
                rules::date(&draft.end_date, "End date", ctx),
            )
            .map(|end_date| EmploymentPeriod::Ended { end_date })
        };
        let description = RichText::new(draft.description.as_str());
        if description.visible_len() < rules::MIN_DESCRIPTION_CHARS {
            sink.push(
                EmploymentField::Description.name(),
                format!(
                    "Description must be at least {} characters.",
                    rules::MIN_DESCRIPTION_CHARS
                ),
            );
        }
        sink.finish(|| {
            Some(Employment {
                job_title: job_title?,
                company_name: company_name?,
                start_date: start_date?,
                period: period?,
                description,
            })
        })
    }

    fn fields(draft: &EmploymentDraft) -> Vec<(&'static str, String)> {
        let end_date = if draft.currently_employed {
            "(hidden while currently employed)".to_string()
        } else {
            draft.end_date.clone()
        };
        vec![
            (EmploymentField::JobTitle.name(), draft.job_title.clone()),
            (EmploymentField::CompanyName.name(), draft.company_name.clone()),
            (EmploymentField::StartDate.name(), draft.start_date.clone()),
            (EmploymentField::EndDate.name(), end_date),
            (
                EmploymentField::CurrentlyEmployed.name(),
                draft.currently_employed.to_string(),
            ),
            (EmploymentField::Description.name(), draft.description.clone()),
        ]
    }
}
