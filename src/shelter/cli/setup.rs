use clap::{Parser, Subcommand};
use shelter::model::{parse_age, Species};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelter", bin_name = "shelter", version)]
#[command(about = "Record manager for a pet adoption center", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files (defaults to the current directory)
    #[arg(short, long, global = true, env = "SHELTER_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add, remove, update or list available pets
    #[command(subcommand)]
    Pet(PetCommands),

    /// Register, remove or list adopters
    #[command(subcommand)]
    Adopter(AdopterCommands),

    /// Hand an available pet over to an adopter
    Adopt { adopter_id: String, pet_id: String },

    /// Interactive numbered menu
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (pets-file, adopters-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PetCommands {
    /// Add a pet to the available set
    #[command(alias = "a")]
    Add {
        /// Dog, Cat or Bird
        species: Species,
        id: String,
        name: String,
        #[arg(value_parser = parse_age)]
        age: u32,
        breed: String,
        health: String,
    },

    /// Remove an available pet
    #[command(alias = "rm")]
    Remove { id: String },

    /// Update the health status of an available pet
    Health { id: String, status: String },

    /// List available pets
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum AdopterCommands {
    /// Register a new adopter
    #[command(alias = "a")]
    Add {
        id: String,
        name: String,
        contact: String,
    },

    /// Remove an adopter (their pets are not returned)
    #[command(alias = "rm")]
    Remove { id: String },

    /// List adopters and the pets they adopted
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shelter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_pet_add() {
        let cli = parse(&["pet", "add", "dog", "P1", "Rex", "3", "Labrador", "Healthy"]);
        match cli.command {
            Some(Commands::Pet(PetCommands::Add { species, age, .. })) => {
                assert_eq!(species, Species::Dog);
                assert_eq!(age, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_age() {
        let args = ["shelter", "pet", "add", "Cat", "C1", "Tom", "two", "Tabby", "Healthy"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn rejects_unknown_species() {
        let args = ["shelter", "pet", "add", "Fish", "F1", "Nemo", "1", "Clown", "Healthy"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = parse(&["adopter", "ls", "--data-dir", "/tmp/shelter", "-v"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Adopter(AdopterCommands::List))
        ));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shelter")));
        assert!(cli.verbose);
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }
}
