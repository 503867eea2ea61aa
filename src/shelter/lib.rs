//! # Shelter Architecture
//!
//! Shelter is a record manager for a small pet adoption center. It keeps pets
//! and adopters in memory, links them through adoptions, and persists both
//! sets as two flat text files between runs.
//!
//! Like any good UI-agnostic library, the core never touches the terminal.
//! The `shelter` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menu, prints      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ShelterApi: owns the center and its store                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, plus load/save                 │
//! │  - Turns outcomes into leveled messages                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (center.rs, codec.rs, store/)                         │
//! │  - AdoptionCenter: records and referential integrity        │
//! │  - codec: one record <-> one line                           │
//! │  - DataStore: FileStore (production), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - A pet is either in the available set or in exactly one adopter's owned
//!   sequence, never both.
//! - Pet ids are non-empty and unique among live pets, available or owned;
//!   adopter ids are unique.
//! - After a save/load cycle every adopter's owned sequence resolves to the
//!   same pets, in the same order.
//!
//! ## Errors
//!
//! Nothing in the core is fatal. Not-found and duplicate outcomes come back
//! as error-level [`CmdMessage`](commands::CmdMessage)s, malformed lines are
//! skipped during load, and missing files load as empty. Only real I/O
//! failures surface as `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`center`]: The in-memory entity store
//! - [`codec`]: Line format for pets and adopters
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Pet`, `Species`, `Adopter`)
//! - [`config`]: Data directory configuration
//! - [`error`]: Error types

pub mod api;
pub mod center;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
