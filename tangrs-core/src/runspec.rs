use std::fmt::{self, Display};

use crate::conditions::{ConditionRegistry, ConditionTemplate};
use crate::errors::{Result, TangrsError};
use crate::models::{InternalId, SequenceCollection};

///
/// The arguments for one predictor invocation, tied to the record they came from.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSpec {
    pub id: InternalId,
    pub command_arguments: String,
}

impl RunSpec {
    ///
    /// Build the argument string for a single record: display name, condition
    /// parameters, then the quoted sequence.
    ///
    pub fn new(id: InternalId, name: &str, template: &ConditionTemplate, sequence: &str) -> Self {
        RunSpec {
            id,
            command_arguments: format!("{} {} seq=\"{}\"", name, template, sequence),
        }
    }

    ///
    /// Split [RunSpec::command_arguments] into an argument vector, the way a
    /// shell would: whitespace separates arguments, and double quotes group
    /// text (including whitespace) and are removed.
    ///
    /// ```
    /// use tangrs_core::{InternalId, RunSpec};
    ///
    /// let spec = RunSpec {
    ///     id: InternalId(0),
    ///     command_arguments: "P1 ph=\"7\" seq=\"MKV\"".to_string(),
    /// };
    /// assert_eq!(spec.args(), vec!["P1", "ph=7", "seq=MKV"]);
    /// ```
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        let mut current = String::new();
        let mut in_argument = false;
        let mut quoted = false;

        for c in self.command_arguments.chars() {
            match c {
                '"' => {
                    quoted = !quoted;
                    in_argument = true;
                }
                c if c.is_whitespace() && !quoted => {
                    if in_argument {
                        args.push(std::mem::take(&mut current));
                        in_argument = false;
                    }
                }
                c => {
                    current.push(c);
                    in_argument = true;
                }
            }
        }
        if in_argument {
            args.push(current);
        }

        args
    }
}

impl Display for RunSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_arguments)
    }
}

///
/// Produce one [RunSpec] per record of `collection` under `template`, in ascending id order.
///
/// # Errors
/// [TangrsError::KeySetMismatch] if the collection has a name without a
/// sequence (or the other way around).
pub fn build_run_specs_with_template(
    collection: &SequenceCollection,
    template: &ConditionTemplate,
) -> Result<Vec<RunSpec>> {
    let names = collection.names();
    let sequences = collection.sequences();

    if let Some(id) = names.keys().find(|id| !sequences.contains_key(*id)) {
        return Err(TangrsError::KeySetMismatch(*id));
    }

    sequences
        .iter()
        .map(|(id, sequence)| {
            let name = names.get(id).ok_or(TangrsError::KeySetMismatch(*id))?;
            Ok(RunSpec::new(*id, name, template, sequence))
        })
        .collect()
}

///
/// Resolve `condition` in `registry` and produce one [RunSpec] per record of `collection`.
///
/// # Arguments
/// - collection: the extracted records
/// - registry: the known conditions
/// - condition: name of the condition to run every record under
///
/// # Errors
/// [TangrsError::UnknownCondition] if `condition` is not in the registry; no
/// specs are produced in that case.
pub fn build_run_specs(
    collection: &SequenceCollection,
    registry: &ConditionRegistry,
    condition: &str,
) -> Result<Vec<RunSpec>> {
    let template = registry.get(condition)?;
    let specs = build_run_specs_with_template(collection, template)?;

    tracing::info!(
        condition,
        specs = specs.len(),
        "built run specs"
    );

    Ok(specs)
}
