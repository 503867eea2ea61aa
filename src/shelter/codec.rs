//! # Record Codec
//!
//! One record per line, fields joined by `,`:
//!
//! ```text
//! pets.txt      <Dog|Cat|Bird>,<id>,<name>,<age>,<breed>,<health>
//! adopters.txt  <id>,<name>,<contact>[,<pet_id>]*
//! ```
//!
//! Fields are never quoted or escaped. A comma inside a name, breed or contact
//! splits the field and the line no longer decodes as intended.

use crate::error::{Result, ShelterError};
use crate::model::{Adopter, AdopterRecord, Pet, Species};

const SEPARATOR: char = ',';
const PET_FIELDS: usize = 6;
const ADOPTER_MIN_FIELDS: usize = 3;

pub fn encode_pet(pet: &Pet) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        pet.species.tag(),
        pet.id,
        pet.name,
        pet.age,
        pet.breed,
        pet.health()
    )
}

/// Decodes one pets-file line.
///
/// `Ok(None)` means the line has the wrong shape (field count or species tag)
/// and should be skipped. A non-numeric age is reported as
/// [`ShelterError::Parse`].
pub fn decode_pet(line: &str) -> Result<Option<Pet>> {
    let parts: Vec<&str> = line.trim().split(SEPARATOR).collect();
    if parts.len() != PET_FIELDS {
        return Ok(None);
    }

    let Some(species) = Species::from_tag(parts[0]) else {
        return Ok(None);
    };

    let age = parts[3].parse::<u32>().map_err(|e| ShelterError::Parse {
        line: line.trim_end().to_string(),
        reason: format!("age {:?} is not a whole number ({})", parts[3], e),
    })?;

    Ok(Some(Pet::new(species, parts[1], parts[2], age, parts[4], parts[5])))
}

/// Encodes an adopter with the ids of the pets it currently owns.
///
/// The three fixed fields are always followed by a separator, so an adopter
/// without pets ends in a trailing comma.
pub fn encode_adopter<'a, I>(adopter: &Adopter, pet_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let ids: Vec<&str> = pet_ids.into_iter().collect();
    format!(
        "{},{},{},{}\n",
        adopter.id,
        adopter.name,
        adopter.contact,
        ids.join(",")
    )
}

pub fn decode_adopter(line: &str) -> Option<AdopterRecord> {
    let mut parts = line.trim().split(SEPARATOR);
    let fields: Vec<&str> = parts.by_ref().take(ADOPTER_MIN_FIELDS).collect();
    if fields.len() < ADOPTER_MIN_FIELDS {
        return None;
    }

    // Only the trailing separator can yield an empty field; pet ids never are.
    let pet_ids = parts
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    Some(AdopterRecord {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        contact: fields[2].to_string(),
        pet_ids,
    })
}
