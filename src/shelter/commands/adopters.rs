use crate::center::AdoptionCenter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelterError};
use crate::model::Adopter;

pub fn register(center: &mut AdoptionCenter, adopter: Adopter) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let view = center.view(&adopter);
    match center.register_adopter(adopter) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "{} has been registered.",
                view.name
            )));
            result.affected_adopters.push(view);
        }
        Err(e @ ShelterError::DuplicateAdopter(_)) => {
            result.add_message(CmdMessage::error(e.to_string()))
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

/// Removes an adopter without handing its pets back to the available set.
/// The pets that go away with the adopter are named in a warning.
pub fn remove(center: &mut AdoptionCenter, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(adopter) = center.remove_adopter(id) else {
        result.add_message(CmdMessage::info(format!(
            "No adopter with id {}; nothing removed.",
            id
        )));
        return Ok(result);
    };

    let view = center.view(&adopter);
    result.add_message(CmdMessage::success(format!("Adopter {} removed.", id)));
    if !view.pets.is_empty() {
        let names: Vec<&str> = view.pets.iter().map(|p| p.name.as_str()).collect();
        result.add_message(CmdMessage::warning(format!(
            "Pets adopted by {} were not returned to the shelter: {}",
            view.name,
            names.join(", ")
        )));
    }
    Ok(result.with_affected_adopters(vec![view]))
}
