//! Bulk load: data files → [`AdoptionCenter`].
//!
//! Pets are loaded first, into the available set. Adopters are rebuilt
//! afterwards by claiming each listed pet id from that set, which is what
//! turns a pets-file line into an owned pet. Ids that match nothing are
//! dropped.
//!
//! Bad lines never abort a load. A missing file means an empty data set.

use crate::center::AdoptionCenter;
use crate::codec;
use crate::commands::{CmdMessage, CmdResult, LoadReport};
use crate::error::{Result, ShelterError};
use crate::model::Adopter;
use crate::store::{DataFile, DataStore};

pub fn run<S: DataStore>(store: &S, center: &mut AdoptionCenter) -> Result<CmdResult> {
    let mut report = LoadReport::default();
    let mut result = CmdResult::default();

    match store.read_lines(DataFile::Pets)? {
        Some(lines) => load_pets(center, &lines, &mut report)?,
        None => {
            tracing::info!("No pet data at {}", store.location(DataFile::Pets).display());
            result.add_message(CmdMessage::info("No pet data found. Starting fresh."));
            report.missing_files.push(DataFile::Pets);
        }
    }

    match store.read_lines(DataFile::Adopters)? {
        Some(lines) => load_adopters(center, &lines, &mut report),
        None => {
            tracing::info!(
                "No adopter data at {}",
                store.location(DataFile::Adopters).display()
            );
            result.add_message(CmdMessage::info("No adopter data found. Starting fresh."));
            report.missing_files.push(DataFile::Adopters);
        }
    }

    if report.skipped_lines > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} malformed line(s) while loading.",
            report.skipped_lines
        )));
    }
    if report.dropped_references > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Dropped {} adopted pet reference(s) with no matching pet record.",
            report.dropped_references
        )));
    }

    tracing::debug!(
        "Loaded {} pet(s) and {} adopter(s)",
        report.pets_loaded,
        report.adopters_loaded
    );
    result.load_report = Some(report);
    Ok(result)
}

fn load_pets(
    center: &mut AdoptionCenter,
    lines: &[String],
    report: &mut LoadReport,
) -> Result<()> {
    for (number, line) in lines.iter().enumerate() {
        let pet = match codec::decode_pet(line) {
            Ok(Some(pet)) => pet,
            Ok(None) => {
                tracing::debug!("Skipping pets line {}: unrecognised record", number + 1);
                report.skipped_lines += 1;
                continue;
            }
            Err(e @ ShelterError::Parse { .. }) => {
                tracing::debug!("Skipping pets line {}: {}", number + 1, e);
                report.skipped_lines += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        match center.add_pet(pet) {
            Ok(_) => report.pets_loaded += 1,
            Err(e @ (ShelterError::DuplicatePet(_) | ShelterError::InvalidInput(_))) => {
                tracing::warn!("Skipping pets line {}: {}", number + 1, e);
                report.skipped_lines += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn load_adopters(center: &mut AdoptionCenter, lines: &[String], report: &mut LoadReport) {
    for (number, line) in lines.iter().enumerate() {
        let Some(record) = codec::decode_adopter(line) else {
            tracing::debug!("Skipping adopters line {}: too few fields", number + 1);
            report.skipped_lines += 1;
            continue;
        };

        // Checked up front so a rejected duplicate never claims pets.
        if center.find_adopter(&record.id).is_some() {
            tracing::warn!(
                "Skipping adopters line {}: adopter {} already loaded",
                number + 1,
                record.id
            );
            report.skipped_lines += 1;
            continue;
        }

        let mut adopter = Adopter::new(record.id, record.name, record.contact);
        for pet_id in &record.pet_ids {
            if center.claim_available(&mut adopter, pet_id).is_none() {
                tracing::warn!(
                    "Adopter {} lists pet {} which is not in the pets file; dropping it",
                    adopter.id,
                    pet_id
                );
                report.dropped_references += 1;
            }
        }

        if center.register_adopter(adopter).is_ok() {
            report.adopters_loaded += 1;
        }
    }
}
