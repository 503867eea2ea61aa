//! # Entity Store
//!
//! [`AdoptionCenter`] owns every pet and adopter for the lifetime of the
//! process. Pet records live in an append-only arena addressed by [`PetKey`].
//! Two things point into it:
//!
//! - the **available set**, an ordered list of keys for pets nobody owns
//! - each adopter's **owned sequence**, an ordered list of keys in adoption order
//!
//! A key is held by at most one of those lists at a time. Adopting a pet moves
//! its key from the available set to the adopter; the record itself never
//! moves or gets copied.
//!
//! Records that fall out of both lists (a removed pet, the pets of a removed
//! adopter) stay in the arena until [`AdoptionCenter::compact`] runs, which
//! [`ShelterApi::save`](crate::api::ShelterApi::save) does before writing.
//!
//! Lookups are linear scans. Iteration always follows insertion order, which
//! is also the line order on save.

use crate::error::{Result, ShelterError};
use crate::model::{Adopter, AdopterView, Pet, PetKey};

#[derive(Debug, Default, Clone)]
pub struct AdoptionCenter {
    records: Vec<Pet>,
    available: Vec<PetKey>,
    adopters: Vec<Adopter>,
}

impl AdoptionCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pet to the end of the available set.
    ///
    /// The id must be non-empty and not held by any live pet, available or
    /// owned. Otherwise the next load could hand an adopter the wrong record.
    pub fn add_pet(&mut self, pet: Pet) -> Result<PetKey> {
        if pet.id.is_empty() {
            return Err(ShelterError::InvalidInput("Pet ID cannot be empty".to_string()));
        }
        if self.live_pets().any(|live| live.id == pet.id) {
            return Err(ShelterError::DuplicatePet(pet.id));
        }
        let key = PetKey(self.records.len());
        self.records.push(pet);
        self.available.push(key);
        Ok(key)
    }

    /// Removes every available pet with the given id and returns copies of
    /// them. Removing an unknown id is a no-op.
    pub fn remove_pet(&mut self, id: &str) -> Vec<Pet> {
        let records = &self.records;
        let (removed, kept): (Vec<PetKey>, Vec<PetKey>) = self
            .available
            .iter()
            .copied()
            .partition(|key| records[key.0].id == id);
        self.available = kept;
        removed.into_iter().map(|key| self.pet(key).clone()).collect()
    }

    pub fn register_adopter(&mut self, adopter: Adopter) -> Result<()> {
        if self.find_adopter(&adopter.id).is_some() {
            return Err(ShelterError::DuplicateAdopter(adopter.id));
        }
        self.adopters.push(adopter);
        Ok(())
    }

    /// Removes the adopter only. Its pets are not returned to the available
    /// set; they stay reachable through the returned value until it is dropped.
    pub fn remove_adopter(&mut self, id: &str) -> Option<Adopter> {
        let position = self.adopters.iter().position(|a| a.id == id)?;
        Some(self.adopters.remove(position))
    }

    /// Moves an available pet into an adopter's owned sequence.
    ///
    /// Both ids are checked before anything changes, so a failed adoption
    /// leaves the center untouched.
    pub fn adopt(&mut self, adopter_id: &str, pet_id: &str) -> Result<PetKey> {
        let adopter_pos = self.adopters.iter().position(|a| a.id == adopter_id);
        let pet_pos = self.available_position(pet_id);

        let (Some(adopter_pos), Some(pet_pos)) = (adopter_pos, pet_pos) else {
            return Err(ShelterError::AdoptionTargetNotFound {
                adopter: adopter_id.to_string(),
                pet: pet_id.to_string(),
            });
        };

        let key = self.available.remove(pet_pos);
        self.adopters[adopter_pos].take_pet(key);
        Ok(key)
    }

    /// Takes an available pet out of the available set on behalf of an
    /// adopter that is not registered yet. Used while rebuilding adopters
    /// from disk.
    pub(crate) fn claim_available(
        &mut self,
        adopter: &mut Adopter,
        pet_id: &str,
    ) -> Option<PetKey> {
        let position = self.available_position(pet_id)?;
        let key = self.available.remove(position);
        adopter.take_pet(key);
        Some(key)
    }

    pub fn update_health(&mut self, id: &str, status: impl Into<String>) -> Result<&Pet> {
        let position = self
            .available_position(id)
            .ok_or_else(|| ShelterError::PetNotFound(id.to_string()))?;
        let key = self.available[position];
        let pet = &mut self.records[key.0];
        pet.set_health(status);
        Ok(&*pet)
    }

    /// Available pets in insertion order. Cloning the iterator restarts it.
    pub fn pets(&self) -> impl Iterator<Item = &Pet> + Clone + '_ {
        self.available.iter().map(move |key| &self.records[key.0])
    }

    /// Registered adopters in registration order.
    pub fn adopters(&self) -> std::slice::Iter<'_, Adopter> {
        self.adopters.iter()
    }

    pub fn find_pet(&self, id: &str) -> Option<&Pet> {
        self.pets().find(|pet| pet.id == id)
    }

    pub fn find_adopter(&self, id: &str) -> Option<&Adopter> {
        self.adopters.iter().find(|a| a.id == id)
    }

    /// # Panics
    ///
    /// If `key` was not handed out by this center, or predates its last
    /// [`compact`](Self::compact).
    pub fn pet(&self, key: PetKey) -> &Pet {
        &self.records[key.0]
    }

    /// Resolves an adopter's owned sequence to the shared pet records.
    pub fn owned_pets<'a>(
        &'a self,
        adopter: &'a Adopter,
    ) -> impl Iterator<Item = &'a Pet> + Clone + 'a {
        adopter.adopted().iter().map(move |&key| self.pet(key))
    }

    pub fn view(&self, adopter: &Adopter) -> AdopterView {
        AdopterView {
            id: adopter.id.clone(),
            name: adopter.name.clone(),
            contact: adopter.contact.clone(),
            pets: self.owned_pets(adopter).cloned().collect(),
        }
    }

    /// Drops records that neither the available set nor any adopter points
    /// to, and renumbers the rest in save order. Every `PetKey` obtained
    /// before the call is invalid afterwards.
    pub fn compact(&mut self) {
        let old = std::mem::take(&mut self.records);
        let mut records = Vec::with_capacity(self.available.len());
        let mut relocate = |key: &mut PetKey| {
            records.push(old[key.0].clone());
            *key = PetKey(records.len() - 1);
        };

        self.available.iter_mut().for_each(&mut relocate);
        for adopter in &mut self.adopters {
            adopter.adopted_mut().iter_mut().for_each(&mut relocate);
        }
        self.records = records;
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn adopter_count(&self) -> usize {
        self.adopters.len()
    }

    fn live_pets(&self) -> impl Iterator<Item = &Pet> + '_ {
        let owned = self
            .adopters
            .iter()
            .flat_map(move |adopter| self.owned_pets(adopter));
        self.pets().chain(owned)
    }

    fn available_position(&self, id: &str) -> Option<usize> {
        self.available
            .iter()
            .position(|key| self.records[key.0].id == id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Species;

    pub struct CenterFixture {
        pub center: AdoptionCenter,
    }

    impl Default for CenterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CenterFixture {
        pub fn new() -> Self {
            Self {
                center: AdoptionCenter::new(),
            }
        }

        pub fn with_pet(mut self, species: Species, id: &str, name: &str) -> Self {
            let pet = Pet::new(species, id, name, 2, "Mixed", "Healthy");
            self.center.add_pet(pet).unwrap();
            self
        }

        pub fn with_pets(mut self, count: usize) -> Self {
            for i in 0..count {
                let pet = Pet::new(
                    Species::ALL[i % Species::ALL.len()],
                    format!("P{}", i + 1),
                    format!("Pet {}", i + 1),
                    i as u32,
                    "Mixed",
                    "Healthy",
                );
                self.center.add_pet(pet).unwrap();
            }
            self
        }

        pub fn with_adopter(mut self, id: &str, name: &str) -> Self {
            let adopter = Adopter::new(id, name, format!("{}@example.com", id));
            self.center.register_adopter(adopter).unwrap();
            self
        }

        pub fn with_adoption(mut self, adopter_id: &str, pet_id: &str) -> Self {
            self.center.adopt(adopter_id, pet_id).unwrap();
            self
        }

        pub fn build(self) -> AdoptionCenter {
            self.center
        }
    }
}
