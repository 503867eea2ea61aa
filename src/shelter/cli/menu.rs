//! The interactive numbered menu.
//!
//! Works on the center loaded at startup and only writes the data files when
//! the operator picks "Save & Exit". Closing stdin mid-session ends the menu
//! with an error and nothing is saved.

use super::commands::AppContext;
use super::print::{print_adopters, print_messages, print_pets};
use dialoguer::Input;
use shelter::error::{Result, ShelterError};
use shelter::model::{parse_age, Adopter, Pet, Species};

const OPTIONS: [&str; 9] = [
    "Add Pet",
    "Remove Pet",
    "Register Adopter",
    "Remove Adopter",
    "List Pets",
    "List Adopters",
    "Adopt Pet",
    "Save & Exit",
    "Update Pet Health",
];

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    loop {
        println!();
        println!("--- Pet Adoption Center ---");
        for (number, label) in OPTIONS.iter().enumerate() {
            println!("{}. {}", number + 1, label);
        }

        let choice = prompt("Enter choice")?;
        match choice.trim() {
            "1" => add_pet(ctx)?,
            "2" => {
                let id = prompt("Enter Pet ID to remove")?;
                print_messages(&ctx.api.remove_pet(id.trim())?.messages);
            }
            "3" => register_adopter(ctx)?,
            "4" => {
                let id = prompt("Enter Adopter ID to remove")?;
                print_messages(&ctx.api.remove_adopter(id.trim())?.messages);
            }
            "5" => print_pets(&ctx.api.list_pets()?.listed_pets),
            "6" => print_adopters(&ctx.api.list_adopters()?.listed_adopters),
            "7" => {
                let adopter_id = prompt("Adopter ID")?;
                let pet_id = prompt("Pet ID")?;
                let result = ctx.api.adopt(adopter_id.trim(), pet_id.trim())?;
                print_messages(&result.messages);
            }
            "8" => {
                ctx.api.save()?;
                println!("Data saved. Goodbye!");
                return Ok(());
            }
            "9" => {
                let id = prompt("Enter Pet ID")?;
                let status = prompt("New health status")?;
                print_messages(&ctx.api.update_health(id.trim(), &status)?.messages);
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}

fn add_pet(ctx: &mut AppContext) -> Result<()> {
    let kind = prompt("Type (Dog/Cat/Bird)")?;
    let id = prompt("Pet ID")?;
    let name = prompt("Name")?;
    let age = prompt_age()?;
    let breed = prompt("Breed")?;
    let health = prompt("Health Status")?;

    // Everything is asked first; an unknown type discards the answers.
    let Ok(species) = kind.parse::<Species>() else {
        println!("Invalid type.");
        return Ok(());
    };

    let pet = Pet::new(species, id.trim(), name, age, breed, health);
    print_messages(&ctx.api.add_pet(pet)?.messages);
    Ok(())
}

fn register_adopter(ctx: &mut AppContext) -> Result<()> {
    let id = prompt("Adopter ID")?;
    let name = prompt("Name")?;
    let contact = prompt("Contact")?;

    let adopter = Adopter::new(id.trim(), name, contact);
    print_messages(&ctx.api.register_adopter(adopter)?.messages);
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

/// Re-asks until the answer is a whole number of years.
fn prompt_age() -> Result<u32> {
    let raw: String = Input::new()
        .with_prompt("Age")
        .validate_with(|input: &String| parse_age(input).map(|_| ()))
        .interact_text()
        .map_err(prompt_error)?;
    parse_age(&raw)
}

fn prompt_error(e: dialoguer::Error) -> ShelterError {
    ShelterError::Io(std::io::Error::other(e.to_string()))
}
