//! CLI command: councillor-match config
//!
//! Prints the configuration `match` would use with the same flags.

use anyhow::{Context, Result};

use super::ConfigArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: ConfigArgs) -> Result<i32> {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(e.exit_code());
        }
    };

    let yaml = serde_yaml::to_string(&config).context("failed to render configuration")?;
    print!("{}", yaml);
    Ok(SUCCESS)
}
