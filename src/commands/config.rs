//! `roster config` command.

use crate::cli::ConfigArgs;
use crate::config::Config;

/// Execute the `config` command: print the resolved configuration as YAML.
///
/// # Errors
///
/// Returns an error string if configuration cannot be resolved.
pub fn run(args: &ConfigArgs) -> Result<(), String> {
    let config = Config::load(args).map_err(|e| e.to_string())?;
    print!("{}", config.to_yaml().map_err(|e| e.to_string())?);
    Ok(())
}
