//! CLI command definitions and handlers.

mod commands;
mod doctor;
mod play;

pub use commands::{Cli, Commands, PlayArgs};
pub use doctor::run_doctor;
pub use play::run_play;
