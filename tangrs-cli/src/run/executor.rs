use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use tangrs_core::{InternalId, RunSpec};
use tangrs_io::{RunOutcome, RunStatus};

///
/// Runs the predictor binary once per [RunSpec], inside a working directory.
///
pub struct Executor {
    binary: PathBuf,
    workdir: PathBuf,
    threads: usize,
}

impl Executor {
    pub fn new(binary: &Path, workdir: &Path, threads: usize) -> Self {
        Executor {
            binary: binary.to_path_buf(),
            workdir: workdir.to_path_buf(),
            threads: threads.max(1),
        }
    }

    ///
    /// Spawn the binary for a single spec and capture its standard output.
    /// A non-zero exit is a [RunStatus::Failed] outcome, not an error; only a
    /// failure to spawn the process is.
    ///
    pub fn run_one(&self, spec: &RunSpec) -> Result<RunOutcome> {
        let output = Command::new(&self.binary)
            .args(spec.args())
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to run {}", self.binary.display()))?;

        let status = match output.status.success() {
            true => RunStatus::Success,
            false => RunStatus::Failed(output.status.code()),
        };

        if status != RunStatus::Success {
            tracing::warn!(id = %spec.id, %status, "predictor run failed");
        }

        Ok(RunOutcome {
            id: spec.id,
            status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    ///
    /// Run every spec not listed in `skip`, on up to `threads` workers.
    ///
    /// # Returns
    /// One outcome per spec, in ascending id order.
    pub fn run_all(&self, specs: &[RunSpec], skip: &HashSet<InternalId>) -> Result<Vec<RunOutcome>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .context("Failed to build thread pool")?;

        let bar = ProgressBar::new(specs.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )?
            .progress_chars("##-"),
        );

        let outcomes: Result<Vec<RunOutcome>> = pool.install(|| {
            specs
                .par_iter()
                .map(|spec| {
                    let outcome = match skip.contains(&spec.id) {
                        true => Ok(RunOutcome::skipped(spec.id)),
                        false => self.run_one(spec),
                    };
                    bar.inc(1);
                    outcome
                })
                .collect()
        });
        bar.finish_and_clear();

        let mut outcomes = outcomes?;
        outcomes.sort_by_key(|outcome| outcome.id);

        Ok(outcomes)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use tangrs_core::{ConditionRegistry, build_run_specs, extract_records};

    #[fixture]
    fn specs() -> Vec<RunSpec> {
        let collection = extract_records(&["alpha ACDEFG", "beta HIKLMN", "gamma 123"]).unwrap();
        build_run_specs(&collection, &ConditionRegistry::builtin(), "default").unwrap()
    }

    #[rstest]
    fn test_run_one_captures_stdout(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let executor = Executor::new(Path::new("echo"), tempdir.path(), 1);

        let outcome = executor.run_one(&specs[0]).unwrap();

        assert_eq!(outcome.id, InternalId(0));
        assert_eq!(outcome.status, RunStatus::Success);
        assert_eq!(
            outcome.stdout,
            "alpha nt=N ct=N ph=7.4 te=298 io=0.1 seq=ACDEFG\n"
        );
    }

    #[rstest]
    fn test_run_all_in_id_order_with_skips(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let executor = Executor::new(Path::new("echo"), tempdir.path(), 3);
        let skip: HashSet<InternalId> = [InternalId(2)].into_iter().collect();

        let outcomes = executor.run_all(&specs, &skip).unwrap();
        let ids: Vec<InternalId> = outcomes.iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![InternalId(0), InternalId(1), InternalId(2)]);
        assert_eq!(outcomes[1].status, RunStatus::Success);
        assert!(outcomes[1].stdout.starts_with("beta "));
        assert_eq!(outcomes[2].status, RunStatus::Skipped);
    }

    #[rstest]
    fn test_failing_binary_is_an_outcome(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let executor = Executor::new(Path::new("false"), tempdir.path(), 1);

        let outcome = executor.run_one(&specs[0]).unwrap();
        assert_eq!(outcome.status, RunStatus::Failed(Some(1)));
    }

    #[rstest]
    fn test_missing_binary_is_an_error(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let executor = Executor::new(Path::new("definitely-not-a-predictor"), tempdir.path(), 1);

        assert!(executor.run_one(&specs[0]).is_err());
    }
}
