use clap::Command;

use crate::common::conditions_config_arg;

pub const CONDITIONS_CMD: &str = "conditions";

pub fn create_conditions_cli() -> Command {
    Command::new(CONDITIONS_CMD)
        .about("List the known conditions and their predictor parameters.")
        .arg(conditions_config_arg())
}
