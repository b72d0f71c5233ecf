//! Command dispatch and handlers.

pub mod config;
pub mod serve;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Serve(args) => serve::run(args),
        Command::Config(args) => config::run(args),
    }
}
