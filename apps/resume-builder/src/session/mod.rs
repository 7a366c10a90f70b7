//! Composition root and the line-oriented command loop.
//!
//! The session owns the store and the six editors. Each editor is seeded from
//! the store once and reports back through its typed updater; the preview is
//! always rendered from the store's latest snapshot.

pub mod command;

use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub use command::Command;

use crate::clock::Clock;
use crate::config::Config;
use crate::editor::{ListEditor, PersonalDetailsEditor, SectionEditor};
use crate::errors::CommandError;
use crate::models::{
    CertificatesSection, EducationSection, EmploymentSection, LanguagesSection,
    PersonalDetailsSection, ResumeRecord, Section, SectionKey, SkillsSection,
};
use crate::preview::{self, PreviewFormat};
use crate::store::ResumeStore;
use crate::validation::SectionStatus;

const HELP: &str = "\
Commands (positions start at 1):
  help                                   show this text
  status                                 validity of every section
  show <section>                         working copy of one section
  preview [text|html|json]               render the committed resume
  add <section>                          append a default entry
  remove <section> <n>                   delete entry n
  set personal <field> <value...>        edit a personal detail
  set <section> <n> <field> <value...>   edit a field of entry n
  quit                                   leave the session
Sections: personal, skills, employment, education, certificates, languages
Write \\n inside a value for a line break.";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub preview_format: PreviewFormat,
    pub auto_preview: bool,
    pub prompt: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            preview_format: PreviewFormat::Text,
            auto_preview: false,
            prompt: "resume> ".to_string(),
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            preview_format: config.preview_format,
            auto_preview: config.auto_preview,
            prompt: config.prompt.clone(),
        }
    }
}

/// What the loop prints for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

struct Editors {
    personal: PersonalDetailsEditor,
    skills: ListEditor<SkillsSection>,
    employment: ListEditor<EmploymentSection>,
    education: ListEditor<EducationSection>,
    certificates: ListEditor<CertificatesSection>,
    languages: ListEditor<LanguagesSection>,
}

impl Editors {
    fn mount(store: &Rc<ResumeStore>, clock: Arc<dyn Clock>) -> Self {
        let record = store.snapshot();
        Self {
            personal: PersonalDetailsEditor::new(
                PersonalDetailsSection::select(&record),
                Arc::clone(&clock),
                ResumeStore::updater::<PersonalDetailsSection>(store),
            ),
            skills: ListEditor::<SkillsSection>::new(
                SkillsSection::select(&record),
                Arc::clone(&clock),
                ResumeStore::updater::<SkillsSection>(store),
            ),
            employment: ListEditor::<EmploymentSection>::new(
                EmploymentSection::select(&record),
                Arc::clone(&clock),
                ResumeStore::updater::<EmploymentSection>(store),
            ),
            education: ListEditor::<EducationSection>::new(
                EducationSection::select(&record),
                Arc::clone(&clock),
                ResumeStore::updater::<EducationSection>(store),
            ),
            certificates: ListEditor::<CertificatesSection>::new(
                CertificatesSection::select(&record),
                Arc::clone(&clock),
                ResumeStore::updater::<CertificatesSection>(store),
            ),
            languages: ListEditor::<LanguagesSection>::new(
                LanguagesSection::select(&record),
                clock,
                ResumeStore::updater::<LanguagesSection>(store),
            ),
        }
    }

    fn get(&self, key: SectionKey) -> &dyn SectionEditor {
        match key {
            SectionKey::PersonalDetails => &self.personal,
            SectionKey::Skills => &self.skills,
            SectionKey::Employment => &self.employment,
            SectionKey::Education => &self.education,
            SectionKey::Certificates => &self.certificates,
            SectionKey::Languages => &self.languages,
        }
    }

    fn get_mut(&mut self, key: SectionKey) -> &mut dyn SectionEditor {
        match key {
            SectionKey::PersonalDetails => &mut self.personal,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Employment => &mut self.employment,
            SectionKey::Education => &mut self.education,
            SectionKey::Certificates => &mut self.certificates,
            SectionKey::Languages => &mut self.languages,
        }
    }
}

pub struct Session {
    store: Rc<ResumeStore>,
    editors: Editors,
    options: SessionOptions,
}

impl Session {
    pub fn new(seed: ResumeRecord, clock: Arc<dyn Clock>, options: SessionOptions) -> Self {
        let store = Rc::new(ResumeStore::new(seed));
        let editors = Editors::mount(&store, clock);
        Self {
            store,
            editors,
            options,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    pub fn status(&self, key: SectionKey) -> &SectionStatus {
        self.editors.get(key).status()
    }

    /// Renders the last committed record.
    pub fn preview(&self, format: PreviewFormat) -> Result<String, CommandError> {
        let doc = preview::project(&self.store.snapshot());
        Ok(preview::render(&doc, format)?)
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Help => Reply::text(HELP),
            Command::Status => Reply::text(self.describe_status()),
            Command::Show(key) => Reply::text(self.describe_section(key)),
            Command::Preview(format) => {
                Reply::text(self.preview(format.unwrap_or(self.options.preview_format))?)
            }
            Command::Add(key) => {
                let editor = self.editors.get_mut(key);
                let id = editor.add_entry()?;
                let position = editor.rows().len();
                let status = editor.status().clone();
                let added = format!("Added {key} entry #{position} (id {id})");
                Reply::text(format!("{added}\n{}", self.outcome(key, &status)?))
            }
            Command::Remove { section, index } => {
                let status = self.editors.get_mut(section).remove_entry(index)?.clone();
                let removed = format!("Removed {section} entry #{}", index + 1);
                Reply::text(format!("{removed}\n{}", self.outcome(section, &status)?))
            }
            Command::Set {
                section,
                index,
                field,
                value,
            } => {
                let status = self
                    .editors
                    .get_mut(section)
                    .edit_field(index, &field, &value)?
                    .clone();
                Reply::text(self.outcome(section, &status)?)
            }
            Command::Quit => Reply {
                text: "Bye.".to_string(),
                quit: true,
            },
        };
        Ok(reply)
    }

    /// Reads commands line by line until `quit` or end of input.
    /// A line that is not UTF-8 is answered with an error and skipped.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(revision = self.store.revision(), "Session started");
        let mut buf = Vec::new();
        loop {
            output.write_all(self.options.prompt.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .context("Failed to read command")?;
            if read == 0 {
                break;
            }
            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    line.parse::<Command>()
                        .and_then(|command| self.execute(command))
                }
                Err(_) => Err(CommandError::InvalidEncoding),
            };
            match reply {
                Ok(reply) => {
                    output.write_all(reply.text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    if reply.quit {
                        break;
                    }
                }
                Err(err) => {
                    debug!(%err, "Command rejected");
                    output.write_all(format!("error: {err}\n").as_bytes()).await?;
                }
            }
        }
        output.flush().await?;
        info!(revision = self.store.revision(), "Session ended");
        Ok(())
    }

    fn outcome(&self, key: SectionKey, status: &SectionStatus) -> Result<String, CommandError> {
        let mut out = match status {
            SectionStatus::Valid => format!(
                "{}: valid, preview updated (revision {})",
                key.title(),
                self.store.revision()
            ),
            SectionStatus::Invalid { errors } => {
                let mut out = format!(
                    "{}: invalid, preview keeps the last valid version",
                    key.title()
                );
                for error in errors {
                    out.push_str(&format!("\n  - {error}"));
                }
                out
            }
        };
        if status.is_valid() && self.options.auto_preview {
            out.push_str("\n\n");
            out.push_str(&self.preview(self.options.preview_format)?);
        }
        Ok(out)
    }

    fn describe_status(&self) -> String {
        let mut out = String::new();
        for key in SectionKey::ALL {
            let line = match self.status(key) {
                SectionStatus::Valid => "valid".to_string(),
                SectionStatus::Invalid { errors } => format!("invalid ({} errors)", errors.len()),
            };
            out.push_str(&format!("{:<20} {line}\n", key.title()));
        }
        out.push_str(&format!("revision {}", self.store.revision()));
        out
    }

    fn describe_section(&self, key: SectionKey) -> String {
        let editor = self.editors.get(key);
        let state = if editor.status().is_valid() {
            "valid"
        } else {
            "invalid"
        };
        let mut out = format!("{} [{state}]", editor.key().title());

        let rows = editor.rows();
        if rows.is_empty() {
            out.push_str("\n(no entries)");
        }
        for row in rows {
            if let (Some(index), Some(id)) = (row.index, row.id) {
                out.push_str(&format!("\n#{} (id {id})", index + 1));
            }
            for (field, value) in row.fields {
                out.push_str(&format!("\n  {field}: {}", value.replace('\n', "\n    ")));
            }
        }
        for error in editor.status().errors() {
            out.push_str(&format!("\n  ! {error}"));
        }
        out
    }
}
