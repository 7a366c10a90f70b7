use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::editor::{lookup_field, EntryId, EntryRow, FieldName, SectionEditor};
use crate::errors::EditError;
use crate::models::{PersonalDetails, SectionKey};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext, SectionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Country,
    City,
    Address,
    JobTitle,
    Summary,
}

impl FieldName for PersonalField {
    const ALL: &'static [Self] = &[
        PersonalField::Name,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::Country,
        PersonalField::City,
        PersonalField::Address,
        PersonalField::JobTitle,
        PersonalField::Summary,
    ];

    fn name(self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Country => "country",
            PersonalField::City => "city",
            PersonalField::Address => "address",
            PersonalField::JobTitle => "jobTitle",
            PersonalField::Summary => "summary",
        }
    }
}

/// Validates the single personal details record.
pub fn parse_personal_details(
    draft: &PersonalDetails,
    _ctx: &RuleContext,
) -> Result<PersonalDetails, Vec<FieldError>> {
    use PersonalField as F;

    let mut sink = ErrorSink::record();
    let name = sink.check(
        F::Name.name(),
        rules::min_chars(&draft.name, rules::MIN_NAME_CHARS, "Name"),
    );
    let email = sink.check(F::Email.name(), rules::email(&draft.email));
    let phone = sink.check(F::Phone.name(), rules::phone(&draft.phone));
    let country = sink.check(
        F::Country.name(),
        rules::min_chars(&draft.country, rules::MIN_NAME_CHARS, "Country"),
    );
    let city = sink.check(
        F::City.name(),
        rules::min_chars(&draft.city, rules::MIN_NAME_CHARS, "City"),
    );
    let address = sink.check(
        F::Address.name(),
        rules::min_chars(&draft.address, rules::MIN_ADDRESS_CHARS, "Address"),
    );
    let job_title = sink.check(
        F::JobTitle.name(),
        rules::min_chars(&draft.job_title, rules::MIN_NAME_CHARS, "Job title"),
    );
    let summary = sink.check(
        F::Summary.name(),
        rules::min_chars(&draft.summary, rules::MIN_DESCRIPTION_CHARS, "Summary"),
    );
    sink.finish(|| {
        Some(PersonalDetails {
            name: name?,
            email: email?,
            phone: phone?,
            country: country?,
            city: city?,
            address: address?,
            job_title: job_title?,
            summary: summary?,
        })
    })
}

pub struct PersonalDetailsEditor {
    draft: PersonalDetails,
    status: SectionStatus,
    clock: Arc<dyn Clock>,
    on_update: Box<dyn FnMut(PersonalDetails)>,
}

impl PersonalDetailsEditor {
    pub fn new(
        initial: &PersonalDetails,
        clock: Arc<dyn Clock>,
        on_update: impl FnMut(PersonalDetails) + 'static,
    ) -> Self {
        let ctx = RuleContext::new(clock.today());
        let status = SectionStatus::from_result(&parse_personal_details(initial, &ctx));
        Self {
            draft: initial.clone(),
            status,
            clock,
            on_update: Box::new(on_update),
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &PersonalDetails {
        &self.draft
    }

    pub fn set_field(&mut self, field: PersonalField, value: &str) -> &SectionStatus {
        let slot = match field {
            PersonalField::Name => &mut self.draft.name,
            PersonalField::Email => &mut self.draft.email,
            PersonalField::Phone => &mut self.draft.phone,
            PersonalField::Country => &mut self.draft.country,
            PersonalField::City => &mut self.draft.city,
            PersonalField::Address => &mut self.draft.address,
            PersonalField::JobTitle => &mut self.draft.job_title,
            PersonalField::Summary => &mut self.draft.summary,
        };
        *slot = value.to_string();
        self.revalidate()
    }

    fn revalidate(&mut self) -> &SectionStatus {
        let ctx = RuleContext::new(self.clock.today());
        match parse_personal_details(&self.draft, &ctx) {
            Ok(details) => {
                debug!(section = %SectionKey::PersonalDetails, "Section valid, propagating");
                self.status = SectionStatus::Valid;
                (self.on_update)(details);
            }
            Err(errors) => {
                debug!(
                    section = %SectionKey::PersonalDetails,
                    errors = errors.len(),
                    "Section invalid, holding last valid value"
                );
                self.status = SectionStatus::Invalid { errors };
            }
        }
        &self.status
    }
}

impl SectionEditor for PersonalDetailsEditor {
    fn key(&self) -> SectionKey {
        SectionKey::PersonalDetails
    }

    fn status(&self) -> &SectionStatus {
        &self.status
    }

    fn rows(&self) -> Vec<EntryRow> {
        let d = &self.draft;
        vec![EntryRow {
            index: None,
            id: None,
            fields: vec![
                (PersonalField::Name.name(), d.name.clone()),
                (PersonalField::Email.name(), d.email.clone()),
                (PersonalField::Phone.name(), d.phone.clone()),
                (PersonalField::Country.name(), d.country.clone()),
                (PersonalField::City.name(), d.city.clone()),
                (PersonalField::Address.name(), d.address.clone()),
                (PersonalField::JobTitle.name(), d.job_title.clone()),
                (PersonalField::Summary.name(), d.summary.clone()),
            ],
        }]
    }

    fn edit_field(
        &mut self,
        index: Option<usize>,
        field: &str,
        value: &str,
    ) -> Result<&SectionStatus, EditError> {
        if index.is_some() {
            return Err(EditError::UnexpectedIndex(SectionKey::PersonalDetails));
        }
        let field = lookup_field::<PersonalField>(SectionKey::PersonalDetails, field)?;
        Ok(self.set_field(field, value))
    }

    fn add_entry(&mut self) -> Result<EntryId, EditError> {
        Err(EditError::NotAList(SectionKey::PersonalDetails))
    }

    fn remove_entry(&mut self, _index: usize) -> Result<&SectionStatus, EditError> {
        Err(EditError::NotAList(SectionKey::PersonalDetails))
    }
}
