use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tangrs_core::{InternalId, SequenceCollection};

use crate::ensure_parent;

pub const SUMMARY_TSV_HEADER: &str = "id\tname\tlength\tstatus\toutput";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The predictor exited unsuccessfully; holds the exit code if there was one.
    Failed(Option<i32>),
    /// Not run, e.g. because the record had no residues.
    Skipped,
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "ok"),
            RunStatus::Failed(Some(code)) => write!(f, "failed({})", code),
            RunStatus::Failed(None) => write!(f, "failed(signal)"),
            RunStatus::Skipped => write!(f, "skipped"),
        }
    }
}

///
/// What happened when the predictor ran for one record.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub id: InternalId,
    pub status: RunStatus,
    pub stdout: String,
}

impl RunOutcome {
    pub fn skipped(id: InternalId) -> Self {
        RunOutcome {
            id,
            status: RunStatus::Skipped,
            stdout: String::new(),
        }
    }
}

///
/// File name for the captured output of one record: `<id>_<name>.out`, or
/// `<id>.out` when the record has no name.
///
pub fn output_file_name(id: InternalId, name: &str) -> String {
    let name: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c => c,
        })
        .collect();

    match name.is_empty() {
        true => format!("{}.out", id),
        false => format!("{}_{}.out", id, name),
    }
}

///
/// Write the captured standard output of every run into `dir`, one file per record.
/// Skipped runs get no file.
///
/// # Returns
/// The path written for each outcome, `None` for skipped ones, in the order of `outcomes`.
pub fn write_outputs<T: AsRef<Path>>(
    dir: T,
    collection: &SequenceCollection,
    outcomes: &[RunOutcome],
) -> std::io::Result<Vec<Option<PathBuf>>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        if outcome.status == RunStatus::Skipped {
            written.push(None);
            continue;
        }

        let name = collection.name(outcome.id).unwrap_or_default();
        let path = dir.join(output_file_name(outcome.id, name));
        std::fs::write(&path, &outcome.stdout)?;
        written.push(Some(path));
    }

    Ok(written)
}

///
/// Write a tab separated summary of a run: one line per outcome with the
/// record's name, sequence length, status and output file.
///
/// # Arguments
/// - path: the path to the file to dump to
/// - collection: the records the outcomes refer to
/// - outcomes: results, correlated to records by id
/// - outputs: output file per outcome, as returned by [write_outputs]
pub fn write_summary<T: AsRef<Path>>(
    path: T,
    collection: &SequenceCollection,
    outcomes: &[RunOutcome],
    outputs: &[Option<PathBuf>],
) -> std::io::Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", SUMMARY_TSV_HEADER)?;

    for (index, outcome) in outcomes.iter().enumerate() {
        let name = collection.name(outcome.id).unwrap_or_default();
        let length = collection.sequence(outcome.id).map(str::len).unwrap_or(0);
        let output = outputs
            .get(index)
            .and_then(|o| o.as_ref())
            .and_then(|o| o.file_name())
            .map(|o| o.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            file,
            "{}\t{}\t{}\t{}\t{}",
            outcome.id, name, length, outcome.status, output
        )?;
    }

    file.flush()
}
