use crate::error::{Result, ShelterError};
use std::fmt;
use std::str::FromStr;

/// The kind of animal a [`Pet`] record describes.
///
/// The variant name doubles as the tag written in the first column of the
/// pets file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Dog,
    Cat,
    Bird,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Bird];

    pub fn tag(self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
        }
    }

    /// Exact match against a persisted tag. Used by the codec, which must not
    /// accept anything the encoder would not have written.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses operator input, case-insensitively (`dog`, `CAT`, `Bird`).
impl FromStr for Species {
    type Err = ShelterError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShelterError::InvalidInput(format!("Invalid type: {}", s)))
    }
}

/// Parses an operator-supplied age. Rejects anything that is not a
/// non-negative integer so a [`Pet`] is never built from a bad value.
pub fn parse_age(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| ShelterError::InvalidInput(format!("Age must be a whole number: {}", input)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub breed: String,
    pub species: Species,
    health: String,
}

impl Pet {
    pub fn new(
        species: Species,
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        breed: impl Into<String>,
        health: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            breed: breed.into(),
            species,
            health: health.into(),
        }
    }

    pub fn health(&self) -> &str {
        &self.health
    }

    pub fn set_health(&mut self, status: impl Into<String>) {
        self.health = status.into();
    }
}

/// Handle to a pet record owned by an [`AdoptionCenter`](crate::center::AdoptionCenter).
///
/// Keys are only minted by the center, so they always resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetKey(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adopter {
    pub id: String,
    pub name: String,
    pub contact: String,
    adopted: Vec<PetKey>,
}

impl Adopter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            adopted: Vec::new(),
        }
    }

    /// Owned pets in adoption order.
    pub fn adopted(&self) -> &[PetKey] {
        &self.adopted
    }

    pub(crate) fn take_pet(&mut self, key: PetKey) {
        self.adopted.push(key);
    }

    pub(crate) fn adopted_mut(&mut self) -> &mut [PetKey] {
        &mut self.adopted
    }
}

/// An adopter line as read from disk. `pet_ids` have not been matched
/// against any pet yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdopterRecord {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub pet_ids: Vec<String>,
}

/// An adopter together with copies of the pets it owns, for callers that
/// live outside the center (listings, command results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdopterView {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub pets: Vec<Pet>,
}
