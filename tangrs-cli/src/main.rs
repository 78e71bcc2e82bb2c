mod common;
mod conditions;
mod logging;
mod parse;
mod run;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "tangrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Turn loosely formatted protein sequence files into aggregation predictor runs.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages (overridden by TANGRS_LOG)"),
        )
        .subcommand(parse::cli::create_parse_cli())
        .subcommand(run::cli::create_run_cli())
        .subcommand(conditions::cli::create_conditions_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // PARSE
        //
        Some((parse::cli::PARSE_CMD, matches)) => {
            parse::handlers::run_parse(matches)?;
        }

        //
        // RUN
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_predictions(matches)?;
        }

        //
        // CONDITIONS
        //
        Some((conditions::cli::CONDITIONS_CMD, matches)) => {
            conditions::handlers::run_conditions(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
