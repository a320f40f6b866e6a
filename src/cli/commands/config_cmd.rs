//! config command - Show effective configuration

use anyhow::Result;

use crate::cli::Context;
use crate::core::config::Config;

/// Print the effective configuration and where it came from.
pub fn show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match config.loaded_from() {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => match Config::config_path() {
            Ok(path) => println!("# No config file found (canonical: {})", path.display()),
            Err(_) => println!("# No config file found"),
        },
    }

    println!("default_format = {}", config.default_format());
    println!("strict_bounds = {}", config.strict_bounds());
    println!("indent = {}", config.indent());
    Ok(())
}
