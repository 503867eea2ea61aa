use colored::Colorize;
use shelter::api::{CmdMessage, MessageLevel};
use shelter::config::{ShelterConfig, KEYS};
use shelter::model::{AdopterView, Pet};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 6] = ["Type", "ID", "Name", "Age", "Breed", "Health"];
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Available pets as an aligned table, one row per pet in insertion order.
pub(super) fn print_pets(pets: &[Pet]) {
    if pets.is_empty() {
        println!("No pets available.");
        return;
    }

    let rows: Vec<[String; 6]> = pets.iter().map(pet_row).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    println!("{}", header.join(COLUMN_GAP).trim_end().bold());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_to_width(cell, w))
            .collect();
        println!("{}", cells.join(COLUMN_GAP).trim_end());
    }
}

pub(super) fn print_adopters(adopters: &[AdopterView]) {
    if adopters.is_empty() {
        println!("No adopters registered.");
        return;
    }

    for adopter in adopters {
        println!(
            "Adopter ID: {}, Name: {}, Contact: {}",
            adopter.id.yellow(),
            adopter.name.bold(),
            adopter.contact
        );
        if adopter.pets.is_empty() {
            continue;
        }
        println!("  Adopted Pets:");
        for pet in &adopter.pets {
            println!("    - {}", describe_pet(pet));
        }
    }
}

pub(super) fn print_config(config: &ShelterConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn pet_row(pet: &Pet) -> [String; 6] {
    [
        pet.species.to_string(),
        pet.id.clone(),
        pet.name.clone(),
        pet.age.to_string(),
        pet.breed.clone(),
        pet.health().to_string(),
    ]
}

fn describe_pet(pet: &Pet) -> String {
    format!(
        "{} - {} ({}), Age: {}, Breed: {}, Health: {}",
        pet.id,
        pet.name,
        pet.species,
        pet.age,
        pet.breed,
        pet.health()
    )
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
