//! # CLI Layer
//!
//! One client of the shelter library. This is the only place that parses
//! arguments, prompts, prints, or decides exit codes.
//!
//! Every invocation follows the same cycle: load both data files, run one
//! operation, and save if that operation changed anything. `menu` keeps the
//! loaded center for the whole session and saves on exit.

use super::logging;
use super::menu;
use super::print::{print_adopters, print_config, print_messages, print_pets};
use super::setup::{AdopterCommands, Cli, Commands, PetCommands};
use clap::Parser;
use shelter::api::{CmdResult, ConfigAction, ShelterApi};
use shelter::config::ShelterConfig;
use shelter::error::Result;
use shelter::model::{Adopter, Pet};
use shelter::store::fs::FileStore;
use std::path::PathBuf;

pub(super) struct AppContext {
    pub(super) api: ShelterApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    // Config never touches the data files.
    if !matches!(cli.command, Some(Commands::Config { .. })) {
        let loaded = ctx.api.load()?;
        print_messages(&loaded.messages);
    }

    match cli.command {
        Some(Commands::Pet(cmd)) => match cmd {
            PetCommands::Add {
                species,
                id,
                name,
                age,
                breed,
                health,
            } => {
                let pet = Pet::new(species, id, name, age, breed, health);
                handle_mutation(&mut ctx, |api| api.add_pet(pet))
            }
            PetCommands::Remove { id } => handle_mutation(&mut ctx, |api| api.remove_pet(&id)),
            PetCommands::Health { id, status } => {
                handle_mutation(&mut ctx, |api| api.update_health(&id, &status))
            }
            PetCommands::List => handle_list_pets(&ctx),
        },
        Some(Commands::Adopter(cmd)) => match cmd {
            AdopterCommands::Add { id, name, contact } => {
                let adopter = Adopter::new(id, name, contact);
                handle_mutation(&mut ctx, |api| api.register_adopter(adopter))
            }
            AdopterCommands::Remove { id } => {
                handle_mutation(&mut ctx, |api| api.remove_adopter(&id))
            }
            AdopterCommands::List => handle_list_adopters(&ctx),
        },
        Some(Commands::Adopt { adopter_id, pet_id }) => {
            handle_mutation(&mut ctx, |api| api.adopt(&adopter_id, &pet_id))
        }
        Some(Commands::Menu) => menu::run(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list_pets(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = ShelterConfig::load(&data_dir)?;
    let store = FileStore::with_config(data_dir.clone(), &config);
    tracing::debug!("Using data directory {}", data_dir.display());

    Ok(AppContext {
        api: ShelterApi::new(store, data_dir),
    })
}

/// Runs one mutating operation and persists the center if it went through.
/// A reported failure (unknown id, duplicate) leaves the files untouched.
fn handle_mutation<F>(ctx: &mut AppContext, op: F) -> Result<()>
where
    F: FnOnce(&mut ShelterApi<FileStore>) -> Result<CmdResult>,
{
    let result = op(&mut ctx.api)?;
    print_messages(&result.messages);
    if !result.is_success() {
        return Ok(());
    }

    let saved = ctx.api.save()?;
    if let Some(report) = saved.save_report {
        tracing::debug!(
            "Wrote {} pet(s) and {} adopter(s)",
            report.pets_written,
            report.adopters_written
        );
    }
    Ok(())
}

fn handle_list_pets(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_pets()?;
    print_pets(&result.listed_pets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_adopters(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_adopters()?;
    print_adopters(&result.listed_adopters);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
