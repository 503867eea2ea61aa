//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelter operation, whatever UI drives it.
//!
//! [`ShelterApi`] owns the [`AdoptionCenter`] and the [`DataStore`] it was
//! loaded from. There is no process-wide state: whoever owns the api owns the
//! data.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O to the terminal**: no stdout, stderr or prompts
//! - **Presentation**: returns [`CmdResult`] values, not formatted text
//!
//! ## Generic Over DataStore
//!
//! - Production: `ShelterApi<FileStore>`
//! - Testing: `ShelterApi<InMemoryStore>`

use crate::center::AdoptionCenter;
use crate::commands;
use crate::error::Result;
use crate::model::{Adopter, Pet};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct ShelterApi<S: DataStore> {
    store: S,
    center: AdoptionCenter,
    data_dir: PathBuf,
}

impl<S: DataStore> ShelterApi<S> {
    /// Creates an api over an empty center. Call [`load`](Self::load) before
    /// anything else to pick up persisted data.
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            store,
            center: AdoptionCenter::new(),
            data_dir,
        }
    }

    /// Replaces the in-memory center with whatever the store holds.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let mut center = AdoptionCenter::new();
        let result = commands::load::run(&self.store, &mut center)?;
        self.center = center;
        Ok(result)
    }

    /// Compacts the center, then writes it out.
    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.center.compact();
        commands::save::run(&mut self.store, &self.center)
    }

    pub fn add_pet(&mut self, pet: Pet) -> Result<commands::CmdResult> {
        commands::pets::add(&mut self.center, pet)
    }

    pub fn remove_pet(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::pets::remove(&mut self.center, id)
    }

    pub fn update_health(&mut self, id: &str, status: &str) -> Result<commands::CmdResult> {
        commands::pets::update_health(&mut self.center, id, status)
    }

    pub fn register_adopter(&mut self, adopter: Adopter) -> Result<commands::CmdResult> {
        commands::adopters::register(&mut self.center, adopter)
    }

    pub fn remove_adopter(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::adopters::remove(&mut self.center, id)
    }

    pub fn list_pets(&self) -> Result<commands::CmdResult> {
        commands::list::pets(&self.center)
    }

    pub fn list_adopters(&self) -> Result<commands::CmdResult> {
        commands::list::adopters(&self.center)
    }

    pub fn adopt(&mut self, adopter_id: &str, pet_id: &str) -> Result<commands::CmdResult> {
        commands::adopt::run(&mut self.center, adopter_id, pet_id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn center(&self) -> &AdoptionCenter {
        &self.center
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, LoadReport, MessageLevel, SaveReport};
