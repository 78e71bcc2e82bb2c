use clap::{Arg, Command};

use crate::common::{format_arg, input_arg};

pub const PARSE_CMD: &str = "parse";

pub fn create_parse_cli() -> Command {
    Command::new(PARSE_CMD)
        .about("Detect the format of a sequence file and print the extracted records.")
        .arg(input_arg())
        .arg(format_arg())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Write the records here instead of stdout"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(clap::ArgAction::SetTrue)
                .help("Write records as JSON instead of TSV"),
        )
}
