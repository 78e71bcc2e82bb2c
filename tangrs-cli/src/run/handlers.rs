use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use tangrs_core::{InternalId, build_run_specs};
use tangrs_io::{RunSpecWrite, RunStatus, write_outputs, write_summary};

use crate::common::{load_collection, load_registry};
use crate::run::cli::SUMMARY_FILE;
use crate::run::executor::Executor;

pub fn run_predictions(matches: &ArgMatches) -> Result<()> {
    let condition = matches
        .get_one::<String>("condition")
        .expect("A condition name is required.");
    let binary = matches
        .get_one::<String>("binary")
        .expect("A predictor binary is required.");
    let outdir = matches
        .get_one::<String>("outdir")
        .expect("An output directory is required.");
    let threads = *matches
        .get_one::<usize>("threads")
        .expect("A thread count is required.");

    let registry = load_registry(matches)?;
    let collection = load_collection(matches)?;
    let specs = build_run_specs(&collection, &registry, condition)?;

    if let Some(conditions_file) = matches.get_one::<String>("conditions-file") {
        let written = match conditions_file.ends_with(".gz") {
            true => specs.write_conditions_gz(conditions_file),
            false => specs.write_conditions(conditions_file),
        };
        written.with_context(|| format!("Failed to write conditions file {}", conditions_file))?;
        tracing::info!(path = %conditions_file, "wrote conditions file");
    }

    if matches.get_flag("dry-run") {
        let mut stdout = io::stdout().lock();
        for spec in &specs {
            writeln!(stdout, "{}", spec)?;
        }
        return Ok(());
    }

    let skip: HashSet<InternalId> = match matches.get_flag("skip-empty") {
        true => collection
            .iter()
            .filter(|record| record.is_empty())
            .map(|record| record.id)
            .collect(),
        false => HashSet::new(),
    };
    if !skip.is_empty() {
        tracing::info!(skipped = skip.len(), "skipping records without residues");
    }

    let outdir = Path::new(outdir);
    std::fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create output directory {}", outdir.display()))?;

    // the predictor runs inside outdir, so a relative path to it has to be resolved first
    let binary = match binary.contains(std::path::MAIN_SEPARATOR) {
        true => std::fs::canonicalize(binary)
            .with_context(|| format!("Can't find predictor binary {}", binary))?,
        false => PathBuf::from(binary),
    };

    let executor = Executor::new(&binary, outdir, threads);
    let outcomes = executor.run_all(&specs, &skip)?;

    let outputs = write_outputs(outdir, &collection, &outcomes)
        .with_context(|| format!("Failed to write predictor output to {}", outdir.display()))?;
    let summary = outdir.join(SUMMARY_FILE);
    write_summary(&summary, &collection, &outcomes, &outputs)
        .with_context(|| format!("Failed to write summary {}", summary.display()))?;

    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome.status, RunStatus::Failed(_)))
        .count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some predictor runs failed");
    }
    tracing::info!(
        runs = outcomes.len() - skip.len(),
        summary = %summary.display(),
        "finished"
    );

    Ok(())
}
