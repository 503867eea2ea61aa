//! Bulk save: [`AdoptionCenter`] → data files.
//!
//! Both files are rewritten from scratch on every save. Nothing from the
//! previous contents survives, including lines a load had to skip.
//!
//! The pets file holds every live record: available pets first, then each
//! adopter's pets in adopter order and adoption order. Load claims the owned
//! ones back from the available set, so ownership survives the round trip.

use crate::center::AdoptionCenter;
use crate::codec;
use crate::commands::{CmdMessage, CmdResult, SaveReport};
use crate::error::Result;
use crate::store::{DataFile, DataStore};

pub fn run<S: DataStore>(store: &mut S, center: &AdoptionCenter) -> Result<CmdResult> {
    let owned = center.adopters().flat_map(|adopter| center.owned_pets(adopter));
    let pet_lines: Vec<String> = center.pets().chain(owned).map(codec::encode_pet).collect();
    store.write_lines(DataFile::Pets, &pet_lines)?;

    let adopter_lines: Vec<String> = center
        .adopters()
        .map(|adopter| {
            let ids = center.owned_pets(adopter).map(|pet| pet.id.as_str());
            codec::encode_adopter(adopter, ids)
        })
        .collect();
    store.write_lines(DataFile::Adopters, &adopter_lines)?;

    let report = SaveReport {
        pets_written: pet_lines.len(),
        adopters_written: adopter_lines.len(),
    };
    tracing::debug!(
        "Saved {} pet(s) to {} and {} adopter(s) to {}",
        report.pets_written,
        store.location(DataFile::Pets).display(),
        report.adopters_written,
        store.location(DataFile::Adopters).display()
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Data saved."));
    result.save_report = Some(report);
    Ok(result)
}
