mod commands;
mod logging;
mod menu;
mod print;
mod setup;

pub use commands::run;
