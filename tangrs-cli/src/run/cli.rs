use clap::{Arg, Command, arg};

use crate::common::{conditions_config_arg, format_arg, input_arg};

pub const RUN_CMD: &str = "run";
pub const DEFAULT_CONDITION: &str = tangrs_core::DEFAULT_CONDITION;
pub const DEFAULT_BINARY: &str = "tango";
pub const DEFAULT_OUTDIR: &str = "tangrs_out";
pub const SUMMARY_FILE: &str = "summary.tsv";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Build one predictor invocation per sequence and run them.")
        .arg(input_arg())
        .arg(format_arg())
        .arg(conditions_config_arg())
        .arg(
            arg!(-c --condition <CONDITION>)
                .required(false)
                .default_value(DEFAULT_CONDITION)
                .help("Name of the condition to run every sequence under"),
        )
        .arg(
            arg!(-b --binary <BINARY>)
                .required(false)
                .default_value(DEFAULT_BINARY)
                .help("Predictor executable, looked up on PATH unless a path is given"),
        )
        .arg(
            arg!(-o --outdir <OUTDIR>)
                .required(false)
                .default_value(DEFAULT_OUTDIR)
                .help("Directory the predictor runs in and results are written to"),
        )
        .arg(
            Arg::new("conditions-file")
                .long("conditions-file")
                .required(false)
                .help("Also write every argument string to this file, one per line (.gz to compress)"),
        )
        .arg(
            arg!(-t --threads <THREADS>)
                .required(false)
                .default_value("1")
                .value_parser(clap::value_parser!(usize))
                .help("Number of predictor processes to run at once"),
        )
        .arg(
            arg!(--"skip-empty")
                .action(clap::ArgAction::SetTrue)
                .help("Do not run sequences that have no residues left after sanitization"),
        )
        .arg(
            arg!(--"dry-run")
                .action(clap::ArgAction::SetTrue)
                .help("Print the argument strings instead of running the predictor"),
        )
}
