use crate::editor::{FieldName, ListSection};
use crate::models::{Language, LanguagesSection, Proficiency};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext};

const PROFICIENCIES: &str = "Basic, Conversational, Fluent, Native";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDraft {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageField {
    Name,
    Proficiency,
}

impl FieldName for LanguageField {
    const ALL: &'static [Self] = &[LanguageField::Name, LanguageField::Proficiency];

    fn name(self) -> &'static str {
        match self {
            LanguageField::Name => "name",
            LanguageField::Proficiency => "proficiency",
        }
    }
}

impl ListSection for LanguagesSection {
    type Item = Language;
    type Draft = LanguageDraft;
    type Field = LanguageField;

    const MIN_ENTRIES: usize = 0;
    const TOO_FEW_MESSAGE: &'static str = "";

    fn blank(_ctx: &RuleContext) -> LanguageDraft {
        LanguageDraft {
            name: String::new(),
            proficiency: Proficiency::Basic.to_string(),
        }
    }

    fn draft(item: &Language) -> LanguageDraft {
        LanguageDraft {
            name: item.name.clone(),
            proficiency: item.proficiency.to_string(),
        }
    }

    fn edit(
        draft: &mut LanguageDraft,
        field: LanguageField,
        value: &str,
        _ctx: &RuleContext,
    ) -> Result<(), String> {
        match field {
            LanguageField::Name => draft.name = value.to_string(),
            LanguageField::Proficiency => draft.proficiency = value.to_string(),
        }
        Ok(())
    }

    fn parse(
        index: usize,
        draft: &LanguageDraft,
        _ctx: &RuleContext,
    ) -> Result<Language, Vec<FieldError>> {
        let mut sink = ErrorSink::entry(index);
        let name = sink.check(
            LanguageField::Name.name(),
            rules::min_chars(&draft.name, rules::MIN_NAME_CHARS, "Language name"),
        );
        let proficiency = sink.check(
            LanguageField::Proficiency.name(),
            rules::one_of::<Proficiency>(&draft.proficiency, "Proficiency", PROFICIENCIES),
        );
        sink.finish(|| {
            Some(Language {
                name: name?,
                proficiency: proficiency?,
            })
        })
    }

    fn fields(draft: &LanguageDraft) -> Vec<(&'static str, String)> {
        vec![
            (LanguageField::Name.name(), draft.name.clone()),
            (LanguageField::Proficiency.name(), draft.proficiency.clone()),
        ]
    }
}
