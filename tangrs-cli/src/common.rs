use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};

use tangrs_core::{
    ConditionRegistry, InputFormat, SequenceCollection, extract_with_format, read_lines,
};

pub const INPUT_ARG: &str = "input";
pub const FORMAT_ARG: &str = "format";
pub const CONDITIONS_CONFIG_ARG: &str = "conditions-config";

pub fn input_arg() -> Arg {
    Arg::new(INPUT_ARG)
        .required(true)
        .help("Sequence file: FASTA, `name sequence`, `name,sequence` or one sequence per line (optionally .gz)")
}

pub fn format_arg() -> Arg {
    Arg::new(FORMAT_ARG)
        .long("format")
        .short('f')
        .required(false)
        .value_parser(["fasta", "space", "csv", "raw"])
        .help("Parse the input as this format instead of detecting it")
}

pub fn conditions_config_arg() -> Arg {
    Arg::new(CONDITIONS_CONFIG_ARG)
        .long("conditions-config")
        .required(false)
        .help("TOML file with extra [conditions.<name>] tables")
}

///
/// Read the input named on the command line, honoring `--format` if given.
///
pub fn load_collection(matches: &ArgMatches) -> Result<SequenceCollection> {
    let input = matches
        .get_one::<String>(INPUT_ARG)
        .expect("A path to a sequence file is required.");
    let path = Path::new(input);

    let collection = match matches.get_one::<String>(FORMAT_ARG) {
        Some(format) => {
            let format = InputFormat::from_str(format).map_err(anyhow::Error::msg)?;
            let lines = read_lines(path).with_context(|| format!("Failed to parse {}", input))?;
            extract_with_format(&lines, format)
                .with_context(|| format!("Failed to parse {} as {}", input, format))?
        }
        None => SequenceCollection::try_from(path)
            .with_context(|| format!("Failed to parse {}", input))?,
    };

    tracing::info!(
        input = %input,
        format = %collection.format(),
        records = collection.len(),
        "loaded sequences"
    );

    Ok(collection)
}

///
/// The built-in conditions, plus the ones from `--conditions-config` if given.
///
pub fn load_registry(matches: &ArgMatches) -> Result<ConditionRegistry> {
    match matches.get_one::<String>(CONDITIONS_CONFIG_ARG) {
        Some(config) => Ok(ConditionRegistry::try_from(Path::new(config))?),
        None => Ok(ConditionRegistry::builtin()),
    }
}
