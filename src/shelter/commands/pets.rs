use crate::center::AdoptionCenter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelterError};
use crate::model::Pet;

pub fn add(center: &mut AdoptionCenter, pet: Pet) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match center.add_pet(pet.clone()) {
        Ok(_) => {
            result.add_message(CmdMessage::success(format!("{} has been added.", pet.name)));
            result.affected_pets.push(pet);
        }
        Err(e @ (ShelterError::DuplicatePet(_) | ShelterError::InvalidInput(_))) => {
            result.add_message(CmdMessage::error(e.to_string()))
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

pub fn remove(center: &mut AdoptionCenter, id: &str) -> Result<CmdResult> {
    let removed = center.remove_pet(id);
    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No available pet with id {}; nothing removed.",
            id
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Pet {} removed.", id)));
    }
    Ok(result.with_affected_pets(removed))
}

pub fn update_health(center: &mut AdoptionCenter, id: &str, status: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match center.update_health(id, status) {
        Ok(pet) => {
            result.add_message(CmdMessage::success(format!(
                "{} is now marked as: {}",
                pet.name,
                pet.health()
            )));
            result.affected_pets.push(pet.clone());
        }
        Err(e @ ShelterError::PetNotFound(_)) => {
            result.add_message(CmdMessage::error(e.to_string()))
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}
