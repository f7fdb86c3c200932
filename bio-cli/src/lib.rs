pub mod cli;
pub mod commands;
pub mod error;
pub mod item_commands;
pub mod link_commands;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::run;
