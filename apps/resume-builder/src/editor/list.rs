//! Generic editor for the five list-valued sections.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::clock::Clock;
use crate::editor::{lookup_field, Entry, EntryId, EntryRow, FieldName, SectionEditor};
use crate::errors::EditError;
use crate::models::{Section, SectionKey};
use crate::validation::{FieldError, RuleContext, SectionStatus};

/// Schema of one list section: its working-state draft, defaults and rules.
pub trait ListSection: Section {
    type Item: Clone + PartialEq + fmt::Debug;
    type Draft: Clone + fmt::Debug;
    type Field: FieldName;

    /// Fewest entries a valid section may hold.
    const MIN_ENTRIES: usize;
    const TOO_FEW_MESSAGE: &'static str;

    /// Draft appended by "add entry".
    fn blank(ctx: &RuleContext) -> Self::Draft;

    fn draft(item: &Self::Item) -> Self::Draft;

    /// Applies raw input to one field. Only rejects input no form control
    /// could produce (e.g. a checkbox value that is not a boolean).
    fn edit(
        draft: &mut Self::Draft,
        field: Self::Field,
        value: &str,
        ctx: &RuleContext,
    ) -> Result<(), String>;

    fn parse(index: usize, draft: &Self::Draft, ctx: &RuleContext)
        -> Result<Self::Item, Vec<FieldError>>;

    fn fields(draft: &Self::Draft) -> Vec<(&'static str, String)>;
}

pub struct ListEditor<S: ListSection> {
    entries: Vec<Entry<S::Draft>>,
    status: SectionStatus,
    clock: Arc<dyn Clock>,
    on_update: Box<dyn FnMut(Vec<S::Item>)>,
}

impl<S: ListSection> ListEditor<S> {
    /// Seeds the working copy. Mounting validates but does not emit.
    pub fn new(
        initial: &[S::Item],
        clock: Arc<dyn Clock>,
        on_update: impl FnMut(Vec<S::Item>) + 'static,
    ) -> Self {
        let mut editor = Self {
            entries: initial.iter().map(|item| Entry::new(S::draft(item))).collect(),
            status: SectionStatus::Valid,
            clock,
            on_update: Box::new(on_update),
        };
        let ctx = editor.context();
        editor.status = SectionStatus::from_result(&editor.validate(&ctx));
        editor
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Entry<S::Draft>] {
        &self.entries
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn set_field(
        &mut self,
        index: usize,
        field: S::Field,
        value: &str,
    ) -> Result<&SectionStatus, EditError> {
        let ctx = self.context();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EditError::NoSuchEntry {
                section: S::KEY,
                index,
            })?;
        S::edit(&mut entry.draft, field, value, &ctx).map_err(|message| {
            EditError::InvalidInput {
                section: S::KEY,
                field: field.name(),
                message,
            }
        })?;
        Ok(self.revalidate(&ctx))
    }

    /// Appends a default entry. Defaults never pass validation on their own,
    /// so nothing is emitted until the new entry is filled in.
    pub fn add(&mut self) -> EntryId {
        let ctx = self.context();
        let entry = Entry::new(S::blank(&ctx));
        let id = entry.id;
        self.entries.push(entry);
        debug!(section = %S::KEY, %id, "Entry added");
        self.revalidate(&ctx);
        id
    }

    /// Removes by identity; later entries shift up one position.
    pub fn remove(&mut self, id: EntryId) -> Result<&SectionStatus, EditError> {
        let index = self.position(id).ok_or(EditError::UnknownEntry {
            section: S::KEY,
            id,
        })?;
        self.entries.remove(index);
        debug!(section = %S::KEY, %id, index, "Entry removed");
        let ctx = self.context();
        Ok(self.revalidate(&ctx))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<&SectionStatus, EditError> {
        let id = self
            .entries
            .get(index)
            .map(|entry| entry.id)
            .ok_or(EditError::NoSuchEntry {
                section: S::KEY,
                index,
            })?;
        self.remove(id)
    }

    /// Parses the whole working copy, collecting every field error.
    pub fn validate(&self, ctx: &RuleContext) -> Result<Vec<S::Item>, Vec<FieldError>> {
        let mut items = Vec::with_capacity(self.entries.len());
        let mut errors = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            match S::parse(index, &entry.draft, ctx) {
                Ok(item) => items.push(item),
                Err(mut entry_errors) => errors.append(&mut entry_errors),
            }
        }
        if self.entries.len() < S::MIN_ENTRIES {
            errors.push(FieldError::section(S::TOO_FEW_MESSAGE));
        }

        if errors.is_empty() {
            Ok(items)
        } else {
            Err(errors)
        }
    }

    fn revalidate(&mut self, ctx: &RuleContext) -> &SectionStatus {
        match self.validate(ctx) {
            Ok(items) => {
                debug!(section = %S::KEY, entries = items.len(), "Section valid, propagating");
                self.status = SectionStatus::Valid;
                (self.on_update)(items);
            }
            Err(errors) => {
                debug!(
                    section = %S::KEY,
                    errors = errors.len(),
                    "Section invalid, holding last valid value"
                );
                self.status = SectionStatus::Invalid { errors };
            }
        }
        &self.status
    }

    fn context(&self) -> RuleContext {
        RuleContext::new(self.clock.today())
    }
}

impl<S: ListSection> SectionEditor for ListEditor<S> {
    fn key(&self) -> SectionKey {
        S::KEY
    }

    fn status(&self) -> &SectionStatus {
        &self.status
    }

    fn rows(&self) -> Vec<EntryRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRow {
                index: Some(index),
                id: Some(entry.id),
                fields: S::fields(&entry.draft),
            })
            .collect()
    }

    fn edit_field(
        &mut self,
        index: Option<usize>,
        field: &str,
        value: &str,
    ) -> Result<&SectionStatus, EditError> {
        let index = index.ok_or(EditError::MissingIndex(S::KEY))?;
        let field = lookup_field::<S::Field>(S::KEY, field)?;
        self.set_field(index, field, value)
    }

    fn add_entry(&mut self) -> Result<EntryId, EditError> {
        Ok(self.add())
    }

    fn remove_entry(&mut self, index: usize) -> Result<&SectionStatus, EditError> {
        self.remove_at(index)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;
    use crate::editor::languages::LanguageField;
    use crate::editor::skills::SkillField;
    use crate::models::{Language, LanguagesSection, Proficiency, Skill, SkillLevel, SkillsSection};
    use crate::seed::example_resume;

    type Emitted<T> = Rc<RefCell<Vec<Vec<T>>>>;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()))
    }

    fn skills_editor() -> (ListEditor<SkillsSection>, Emitted<Skill>) {
        let emitted: Emitted<Skill> = Rc::default();
        let sink = Rc::clone(&emitted);
        let editor = ListEditor::<SkillsSection>::new(
            &example_resume().technical_skills,
            clock(),
            move |skills| sink.borrow_mut().push(skills),
        );
        (editor, emitted)
    }

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_mount_validates_without_emitting() {
        let (editor, emitted) = skills_editor();
        assert!(editor.status().is_valid());
        assert_eq!(editor.entries().len(), 5);
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_valid_edit_emits_complete_section_in_order() {
        let (mut editor, emitted) = skills_editor();
        let status = editor.set_field(1, SkillField::Name, "Rust").unwrap();
        assert!(status.is_valid());

        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(
            names(&emitted[0]),
            vec!["React", "Rust", "Node.js", "CSS", "GraphQL"]
        );
    }

    #[test]
    fn test_every_valid_edit_emits() {
        let (mut editor, emitted) = skills_editor();
        editor.set_field(0, SkillField::Name, "Vue").unwrap();
        editor.set_field(0, SkillField::Name, "Vue").unwrap();
        assert_eq!(emitted.borrow().len(), 2);
    }

    #[test]
    fn test_invalid_edit_withholds_update() {
        let (mut editor, emitted) = skills_editor();
        let status = editor.set_field(0, SkillField::Name, "R").unwrap();
        assert!(!status.is_valid());
        assert_eq!(status.errors().len(), 1);
        assert_eq!(status.errors()[0].entry, Some(0));
        assert_eq!(status.errors()[0].field, "name");
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_out_of_set_level_is_a_field_error() {
        let (mut editor, emitted) = skills_editor();
        let status = editor.set_field(0, SkillField::Level, "Guru").unwrap();
        assert!(!status.is_valid());
        assert_eq!(status.errors()[0].field, "level");
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_add_then_name_new_skill() {
        let (mut editor, emitted) = skills_editor();

        let id = editor.add();
        assert!(!editor.status().is_valid(), "blank name fails min length");
        assert!(emitted.borrow().is_empty());
        assert_eq!(editor.position(id), Some(5));

        editor.set_field(5, SkillField::Name, "R").unwrap();
        assert!(emitted.borrow().is_empty());

        editor.set_field(5, SkillField::Name, "Rust").unwrap();
        let emitted = emitted.borrow();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].len(), 6);
        assert_eq!(
            emitted[0][5],
            Skill {
                name: "Rust".to_string(),
                level: SkillLevel::Beginner
            }
        );
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let (mut editor, emitted) = skills_editor();
        let ids: Vec<EntryId> = editor.entries().iter().map(|e| e.id).collect();

        editor.remove_at(1).unwrap();

        let remaining: Vec<EntryId> = editor.entries().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3], ids[4]]);
        assert_eq!(
            names(&emitted.borrow()[0]),
            vec!["React", "Node.js", "CSS", "GraphQL"]
        );
    }

    #[test]
    fn test_remove_by_identity_after_reorder_of_positions() {
        let (mut editor, _emitted) = skills_editor();
        let css = editor.entries()[3].id;
        editor.remove_at(0).unwrap();
        assert_eq!(editor.position(css), Some(2));
        editor.remove(css).unwrap();
        assert_eq!(editor.position(css), None);
        assert!(matches!(
            editor.remove(css),
            Err(EditError::UnknownEntry { .. })
        ));
    }

    #[test]
    fn test_remove_below_minimum_is_allowed_but_invalid() {
        let emitted: Emitted<Skill> = Rc::default();
        let sink = Rc::clone(&emitted);
        let seed = vec![Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        }];
        let mut editor =
            ListEditor::<SkillsSection>::new(&seed, clock(), move |v| sink.borrow_mut().push(v));

        let status = editor.remove_at(0).unwrap();
        assert!(!status.is_valid());
        assert_eq!(
            status.errors()[0].to_string(),
            "section: At least one skill is required."
        );
        assert!(emitted.borrow().is_empty());
        assert!(editor.entries().is_empty());
    }

    #[test]
    fn test_remove_to_empty_propagates_when_allowed() {
        let emitted: Emitted<Language> = Rc::default();
        let sink = Rc::clone(&emitted);
        let seed = vec![Language {
            name: "English".to_string(),
            proficiency: Proficiency::Native,
        }];
        let mut editor = ListEditor::<LanguagesSection>::new(&seed, clock(), move |v| {
            sink.borrow_mut().push(v)
        });

        assert!(editor.remove_at(0).unwrap().is_valid());
        assert_eq!(emitted.borrow().as_slice(), &[Vec::<Language>::new()]);
    }

    #[test]
    fn test_remove_repairs_invalid_section() {
        let emitted: Emitted<Language> = Rc::default();
        let sink = Rc::clone(&emitted);
        let mut editor =
            ListEditor::<LanguagesSection>::new(&[], clock(), move |v| sink.borrow_mut().push(v));

        editor.add();
        assert!(!editor.status().is_valid());
        editor.set_field(0, LanguageField::Name, "X").unwrap();
        assert!(emitted.borrow().is_empty());

        assert!(editor.remove_at(0).unwrap().is_valid());
        assert_eq!(emitted.borrow().len(), 1);
    }

    #[test]
    fn test_bad_position_is_an_edit_error() {
        let (mut editor, _emitted) = skills_editor();
        assert_eq!(
            editor.set_field(9, SkillField::Name, "Rust").unwrap_err(),
            EditError::NoSuchEntry {
                section: SectionKey::Skills,
                index: 9
            }
        );
        assert!(editor.remove_at(5).is_err());
    }

    #[test]
    fn test_string_addressed_edit() {
        let (mut editor, emitted) = skills_editor();
        let dyn_editor: &mut dyn SectionEditor = &mut editor;

        assert!(dyn_editor.edit_field(Some(0), "LEVEL", "Beginner").unwrap().is_valid());
        assert!(matches!(
            dyn_editor.edit_field(None, "name", "Rust"),
            Err(EditError::MissingIndex(SectionKey::Skills))
        ));
        assert!(matches!(
            dyn_editor.edit_field(Some(0), "years", "3"),
            Err(EditError::UnknownField { .. })
        ));
        assert_eq!(emitted.borrow()[0][0].level, SkillLevel::Beginner);
        assert_eq!(dyn_editor.rows()[0].fields[0], ("name", "React".to_string()));
    }
}
