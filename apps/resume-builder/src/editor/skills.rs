use crate::editor::{FieldName, ListSection};
use crate::models::{Skill, SkillLevel, SkillsSection};
use crate::validation::{rules, ErrorSink, FieldError, RuleContext};

const LEVELS: &str = "Beginner, Intermediate, Advanced, Expert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Level,
}

impl FieldName for SkillField {
    const ALL: &'static [Self] = &[SkillField::Name, SkillField::Level];

    fn name(self) -> &'static str {
        match self {
            SkillField::Name => "name",
            SkillField::Level => "level",
        }
    }
}

impl ListSection for SkillsSection {
    type Item = Skill;
    type Draft = SkillDraft;
    type Field = SkillField;

    const MIN_ENTRIES: usize = 1;
    const TOO_FEW_MESSAGE: &'static str = "At least one skill is required.";

    fn blank(_ctx: &RuleContext) -> SkillDraft {
        SkillDraft {
            name: String::new(),
            level: SkillLevel::Beginner.to_string(),
        }
    }

    fn draft(item: &Skill) -> SkillDraft {
        SkillDraft {
            name: item.name.clone(),
            level: item.level.to_string(),
        }
    }

    fn edit(
        draft: &mut SkillDraft,
        field: SkillField,
        value: &str,
        _ctx: &RuleContext,
    ) -> Result<(), String> {
        match field {
            SkillField::Name => draft.name = value.to_string(),
            SkillField::Level => draft.level = value.to_string(),
        }
        Ok(())
    }

    fn parse(index: usize, draft: &SkillDraft, _ctx: &RuleContext) -> Result<Skill, Vec<FieldError>> {
        let mut sink = ErrorSink::entry(index);
        let name = sink.check(
            SkillField::Name.name(),
            rules::min_chars(&draft.name, rules::MIN_NAME_CHARS, "Skill name"),
        );
        let level = sink.check(
            SkillField::Level.name(),
            rules::one_of::<SkillLevel>(&draft.level, "Skill level", LEVELS),
        );
        sink.finish(|| Some(Skill { name: name?, level: level? }))
    }

    fn fields(draft: &SkillDraft) -> Vec<(&'static str, String)> {
        vec![
            (SkillField::Name.name(), draft.name.clone()),
            (SkillField::Level.name(), draft.level.clone()),
        ]
    }
}
