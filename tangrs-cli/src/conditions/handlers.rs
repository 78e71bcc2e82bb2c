use std::io::{self, Write};

use anyhow::Result;
use clap::ArgMatches;

use crate::common::load_registry;

pub fn run_conditions(matches: &ArgMatches) -> Result<()> {
    let registry = load_registry(matches)?;

    let mut stdout = io::stdout().lock();
    for template in registry.iter() {
        writeln!(stdout, "{}\t{}", template.name(), template)?;
    }

    Ok(())
}
