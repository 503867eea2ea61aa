use crate::config::ShelterConfig;
use crate::model::{AdopterView, Pet};
use crate::store::DataFile;

pub mod adopt;
pub mod adopters;
pub mod config;
pub mod list;
pub mod load;
pub mod pets;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a bulk load found, beyond the records themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub pets_loaded: usize,
    pub adopters_loaded: usize,
    /// Lines that did not decode, or duplicated an id already loaded.
    pub skipped_lines: usize,
    /// Adopter pet ids that did not match any available pet.
    pub dropped_references: usize,
    pub missing_files: Vec<DataFile>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub pets_written: usize,
    pub adopters_written: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pets: Vec<Pet>,
    pub affected_adopters: Vec<AdopterView>,
    pub listed_pets: Vec<Pet>,
    pub listed_adopters: Vec<AdopterView>,
    pub load_report: Option<LoadReport>,
    pub save_report: Option<SaveReport>,
    pub config: Option<ShelterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// A command failed when it reported an error-level outcome, e.g. an
    /// adoption whose adopter or pet was not found.
    pub fn is_success(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn with_affected_pets(mut self, pets: Vec<Pet>) -> Self {
        self.affected_pets = pets;
        self
    }

    pub fn with_affected_adopters(mut self, adopters: Vec<AdopterView>) -> Self {
        self.affected_adopters = adopters;
        self
    }

    pub fn with_listed_pets(mut self, pets: Vec<Pet>) -> Self {
        self.listed_pets = pets;
        self
    }

    pub fn with_listed_adopters(mut self, adopters: Vec<AdopterView>) -> Self {
        self.listed_adopters = adopters;
        self
    }

    pub fn with_config(mut self, config: ShelterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
