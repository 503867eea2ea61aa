use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Adopter or Pet not found.")]
    AdoptionTargetNotFound { adopter: String, pet: String },

    #[error("A pet with id {0} is already available")]
    DuplicatePet(String),

    #[error("An adopter with id {0} is already registered")]
    DuplicateAdopter(String),

    #[error("Malformed record {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelterError>;
