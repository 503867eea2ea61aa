use crate::center::AdoptionCenter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelterError};

/// Moves a pet from the available set to an adopter.
///
/// A missing adopter or pet is an ordinary outcome: the result carries an
/// error-level message and the center is left as it was.
pub fn run(center: &mut AdoptionCenter, adopter_id: &str, pet_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let key = match center.adopt(adopter_id, pet_id) {
        Ok(key) => key,
        Err(e @ ShelterError::AdoptionTargetNotFound { .. }) => {
            tracing::debug!("Adoption of {} by {} rejected: {}", pet_id, adopter_id, e);
            result.add_message(CmdMessage::error(e.to_string()));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    let pet = center.pet(key).clone();
    if let Some(adopter) = center.find_adopter(adopter_id) {
        result.add_message(CmdMessage::success(format!(
            "{} has adopted {}.",
            adopter.name, pet.name
        )));
        result.affected_adopters.push(center.view(adopter));
    }
    Ok(result.with_affected_pets(vec![pet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::center::fixtures::CenterFixture;
    use crate::model::Species;

    #[test]
    fn adoption_moves_pet_and_reports() {
        let mut center = CenterFixture::new()
            .with_pet(Species::Dog, "P1", "Rex")
            .with_pet(Species::Cat, "P2", "Tom")
            .with_adopter("A1", "Jane")
            .build();

        let result = run(&mut center, "A1", "P1").unwrap();
        assert!(result.is_success());
        assert_eq!(result.messages[0].content, "Jane has adopted Rex.");
        assert_eq!(result.affected_adopters[0].pets[0].id, "P1");

        assert!(center.find_pet("P1").is_none());
        let jane = center.find_adopter("A1").unwrap();
        let owned: Vec<_> = center.owned_pets(jane).map(|p| p.id.as_str()).collect();
        assert_eq!(owned, vec!["P1"]);
    }

    #[test]
    fn adopting_twice_appends_in_order() {
        let mut center = CenterFixture::new()
            .with_pets(3)
            .with_adopter("A1", "Jane")
            .build();

        run(&mut center, "A1", "P3").unwrap();
        run(&mut center, "A1", "P1").unwrap();

        let jane = center.find_adopter("A1").unwrap();
        let owned: Vec<_> = center.owned_pets(jane).map(|p| p.id.as_str()).collect();
        assert_eq!(owned, vec!["P3", "P1"]);
    }

    #[test]
    fn missing_target_reports_not_found_and_changes_nothing() {
        let mut center = CenterFixture::new()
            .with_pets(1)
            .with_adopter("A1", "Jane")
            .build();

        for (adopter, pet) in [("A2", "P1"), ("A1", "P2"), ("A2", "P2")] {
            let result = run(&mut center, adopter, pet).unwrap();
            assert!(!result.is_success());
            assert_eq!(result.messages[0].content, "Adopter or Pet not found.");
            assert!(result.affected_pets.is_empty());
        }

        assert_eq!(center.available_count(), 1);
        assert!(center.find_adopter("A1").unwrap().adopted().is_empty());
    }

    #[test]
    fn already_adopted_pet_cannot_be_adopted_again() {
        let mut center = CenterFixture::new()
            .with_pets(1)
            .with_adopter("A1", "Jane")
            .with_adopter("A2", "John")
            .with_adoption("A1", "P1")
            .build();

        let result = run(&mut center, "A2", "P1").unwrap();
        assert!(!result.is_success());
        assert!(center.find_adopter("A2").unwrap().adopted().is_empty());
    }
}
