//! Resume State Container.
//!
//! Holds the single active `ResumeRecord`. Sections are replaced wholesale;
//! readers only ever see a complete record through `snapshot`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{ResumeRecord, Section, SectionUpdate};

pub struct ResumeStore {
    current: RefCell<Arc<ResumeRecord>>,
    revision: Cell<u64>,
}

impl ResumeStore {
    pub fn new(seed: ResumeRecord) -> Self {
        Self {
            current: RefCell::new(Arc::new(seed)),
            revision: Cell::new(0),
        }
    }

    /// The current record. Later replacements never change what it points to.
    pub fn snapshot(&self) -> Arc<ResumeRecord> {
        self.current.borrow().clone()
    }

    /// Number of replacements committed since the seed.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Swaps in a record with one section replaced. Returns `false`, leaving
    /// the record and revision untouched, when the value is already held.
    pub fn replace_section(&self, update: SectionUpdate) -> bool {
        let key = update.key();
        let entries = update.len();
        let current = self.snapshot();
        if current.holds(&update) {
            debug!(section = %key, "Section unchanged, skipping commit");
            return false;
        }

        let next = current.with_section(update);
        *self.current.borrow_mut() = Arc::new(next);
        let revision = self.revision.get() + 1;
        self.revision.set(revision);
        info!(section = %key, entries, revision, "Section committed");
        true
    }

    /// Typed callback for one section's editor.
    pub fn updater<S: Section>(store: &Rc<Self>) -> impl FnMut(S::Value) + 'static {
        let store = Rc::clone(store);
        move |value| {
            store.replace_section(S::into_update(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Language, LanguagesSection, Proficiency, SectionKey, Skill, SkillLevel, SkillsSection,
    };
    use crate::seed::example_resume;

    fn skills() -> Vec<Skill> {
        vec![Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Beginner,
        }]
    }

    #[test]
    fn test_replace_section_leaves_siblings_shared() {
        let store = ResumeStore::new(example_resume());
        let before = store.snapshot();

        assert!(store.replace_section(SectionUpdate::Skills(skills())));
        let after = store.snapshot();

        assert_eq!(*after.technical_skills, skills());
        assert!(Arc::ptr_eq(&before.personal_details, &after.personal_details));
        assert!(Arc::ptr_eq(&before.employments, &after.employments));
        assert!(Arc::ptr_eq(&before.educations, &after.educations));
        assert!(Arc::ptr_eq(&before.certificates, &after.certificates));
        assert!(Arc::ptr_eq(&before.languages, &after.languages));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_old_snapshot_is_not_mutated() {
        let store = ResumeStore::new(example_resume());
        let before = store.snapshot();
        store.replace_section(SectionUpdate::Skills(skills()));
        assert_eq!(before.technical_skills.len(), 5);
    }

    #[test]
    fn test_resubmitting_same_value_is_a_no_op() {
        let store = ResumeStore::new(example_resume());
        assert!(store.replace_section(SectionUpdate::Skills(skills())));
        let first = store.snapshot();

        assert!(!store.replace_section(SectionUpdate::Skills(skills())));
        let second = store.snapshot();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_seed_value_resubmitted_is_a_no_op() {
        let seed = example_resume();
        let store = ResumeStore::new(seed.clone());
        let update = SectionUpdate::Languages(seed.languages.to_vec());
        assert_eq!(update.key(), SectionKey::Languages);
        assert!(!store.replace_section(update));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_updater_routes_typed_value() {
        let store = Rc::new(ResumeStore::new(example_resume()));
        let mut on_skills = ResumeStore::updater::<SkillsSection>(&store);
        let mut on_languages = ResumeStore::updater::<LanguagesSection>(&store);

        on_skills(skills());
        on_languages(Vec::new());
        on_languages(vec![Language {
            name: "German".to_string(),
            proficiency: Proficiency::Basic,
        }]);

        let record = store.snapshot();
        assert_eq!(record.technical_skills.len(), 1);
        assert_eq!(record.languages[0].name, "German");
        assert_eq!(store.revision(), 3);
    }
}
