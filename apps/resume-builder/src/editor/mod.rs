//! Section editors: local working copies that validate every edit and push
//! the complete section upward whenever it is valid.
//!
//! Each editor is seeded once from the store and never re-read from it.

pub mod certificates;
pub mod education;
pub mod employment;
pub mod languages;
pub mod list;
pub mod personal;
pub mod skills;

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::EditError;
use crate::models::SectionKey;
use crate::validation::SectionStatus;

pub use list::{ListEditor, ListSection};
pub use personal::PersonalDetailsEditor;

/// Stable identity of a list entry for as long as its editor lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        f.write_str(&simple[..8])
    }
}

/// One element of a list editor's working state.
#[derive(Debug, Clone)]
pub struct Entry<D> {
    pub id: EntryId,
    pub draft: D,
}

impl<D> Entry<D> {
    pub fn new(draft: D) -> Self {
        Self {
            id: EntryId::new(),
            draft,
        }
    }
}

/// Names of the editable fields of one section.
///
/// Lookup ignores ASCII case, `_` and `-`, so `jobTitle`, `job_title` and
/// `job-title` all resolve to the same field.
pub trait FieldName: Copy + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|field| normalize(field.name()) == wanted)
    }

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|field| field.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub(crate) fn lookup_field<F: FieldName>(section: SectionKey, name: &str) -> Result<F, EditError> {
    F::from_name(name).ok_or_else(|| EditError::UnknownField {
        section,
        field: name.to_string(),
        expected: F::expected(),
    })
}

/// Working-state snapshot of one entry, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub index: Option<usize>,
    pub id: Option<EntryId>,
    pub fields: Vec<(&'static str, String)>,
}

/// Uniform, string-addressed access to the six editors.
pub trait SectionEditor {
    fn key(&self) -> SectionKey;

    fn status(&self) -> &SectionStatus;

    fn rows(&self) -> Vec<EntryRow>;

    /// `index` is required for list sections and rejected for personal details.
    fn edit_field(
        &mut self,
        index: Option<usize>,
        field: &str,
        value: &str,
    ) -> Result<&SectionStatus, EditError>;

    fn add_entry(&mut self) -> Result<EntryId, EditError>;

    fn remove_entry(&mut self, index: usize) -> Result<&SectionStatus, EditError>;
}
