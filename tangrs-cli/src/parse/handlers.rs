use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::ArgMatches;

use tangrs_io::CollectionWrite;

use crate::common::load_collection;

pub fn run_parse(matches: &ArgMatches) -> Result<()> {
    let collection = load_collection(matches)?;
    let json = matches.get_flag("json");

    match matches.get_one::<String>("output") {
        Some(output) => {
            let written = match json {
                true => collection.write_json(output),
                false => collection.write_tsv(output),
            };
            written.with_context(|| format!("Failed to write records to {}", output))?;
            tracing::info!(output = %output, "wrote records");
        }
        None => {
            let stdout = BufWriter::new(io::stdout().lock());
            match json {
                true => collection.write_json_to(stdout)?,
                false => collection.write_tsv_to(stdout)?,
            }
        }
    }

    Ok(())
}
