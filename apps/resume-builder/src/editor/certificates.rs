use crate::editor::{FieldName, ListSection};
use crate::models::{Certificate, CertificatesSection};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDraft {
    pub name: String,
    pub month: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateField {
    Name,
    Month,
    Year,
    Description,
}

impl FieldName for CertificateField {
    const ALL: &'static [Self] = &[
        CertificateField::Name,
        CertificateField::Month,
        CertificateField::Year,
        CertificateField::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            CertificateField::Name => "name",
            CertificateField::Month => "month",
            CertificateField::Year => "year",
            CertificateField::Description => "description",
        }
    }
}

impl ListSection for CertificatesSection {
    type Item = Certificate;
    type Draft = CertificateDraft;
    type Field = CertificateField;

    const MIN_ENTRIES: usize = 0;
    const TOO_FEW_MESSAGE: &'static str = "";

    fn blank(ctx: &RuleContext) -> CertificateDraft {
        CertificateDraft {
            name: String::new(),
            month: "1".to_string(),
            year: ctx.current_year().to_string(),
            description: String::new(),
        }
    }

    fn draft(item: &Certificate) -> CertificateDraft {
        CertificateDraft {
            name: item.name.clone(),
            month: item.month.to_string(),
            year: item.year.to_string(),
            description: item.description.clone(),
        }
    }

    fn edit(
        draft: &mut CertificateDraft,
        field: CertificateField,
        value: &str,
        _ctx: &RuleContext,
    ) -> Result<(), String> {
        let slot = match field {
            CertificateField::Name => &mut draft.name,
            CertificateField::Month => &mut draft.month,
            CertificateField::Year => &mut draft.year,
            CertificateField::Description => &mut draft.description,
        };
        *slot = value.to_string();
        Ok(())
    }

    fn parse(
        index: usize,
        draft: &CertificateDraft,
        ctx: &RuleContext,
    ) -> Result<Certificate, Vec<FieldError>> {
        let mut sink = ErrorSink::entry(index);
        let name = sink.check(
            CertificateField::Name.name(),
            rules::min_chars(&draft.name, rules::MIN_NAME_CHARS, "Certificate name"),
        );
        let month = sink.check(CertificateField::Month.name(), rules::month(&draft.month));
        let year = sink.check(
            CertificateField::Year.name(),
            rules::year(&draft.year, "Year", ctx),
        );
        if let (Some(month), Some(year)) = (month, year) {
            if year == ctx.current_year() && month > ctx.current_month() {
                sink.push(
                    CertificateField::Month.name(),
                    "Certificate date cannot be in the future.",
                );
            }
        }
        let description = sink.check(
            CertificateField::Description.name(),
            rules::min_chars(
                &draft.description,
                rules::MIN_DESCRIPTION_CHARS,
                "Description",
            ),
        );
        sink.finish(|| {
            Some(Certificate {
                name: name?,
                month: month?,
                year: year?,
                description: description?,
            })
        })
    }

    fn fields(draft: &CertificateDraft) -> Vec<(&'static str, String)> {
        vec![
            (CertificateField::Name.name(), draft.name.clone()),
            (CertificateField::Month.name(), draft.month.clone()),
            (CertificateField::Year.name(), draft.year.clone()),
            (CertificateField::Description.name(), draft.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ctx() -> RuleContext {
        RuleContext::new(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
    }

    fn draft() -> CertificateDraft {
        CertificateDraft {
            name: "CKA".to_string(),
            month: "2".to_string(),
            year: "2024".to_string(),
            description: "Kubernetes administration.".to_string(),
        }
    }

    #[test]
    fn test_month_thirteen_rejected() {
        let mut d = draft();
        d.month = "13".to_string();
        let errors = CertificatesSection::parse(0, &d, &ctx()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "month");
        assert_eq!(errors[0].message, "Month must be between 1 and 12.");
    }

    #[test]
    fn test_later_month_of_current_year_rejected() {
        let mut d = draft();
        d.year = "2025".to_string();
        d.month = "3".to_string();
        assert!(CertificatesSection::parse(0, &d, &ctx()).is_ok());

        d.month = "4".to_string();
        let errors = CertificatesSection::parse(0, &d, &ctx()).unwrap_err();
        assert_eq!(errors[0].message, "Certificate date cannot be in the future.");
    }

    #[test]
    fn test_short_description_rejected() {
        let mut d = draft();
        d.description = "Too short".to_string();
        let errors = CertificatesSection::parse(0, &d, &ctx()).unwrap_err();
        assert_eq!(errors[0].message, "Description must be at least 10 characters.");
    }

    #[test]
    fn test_blank_certificate_defaults() {
        let blank = CertificatesSection::blank(&ctx());
        assert_eq!(blank.month, "1");
        assert_eq!(blank.year, "2025");
        let errors = CertificatesSection::parse(0, &blank, &ctx()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "description"]);
    }
}
