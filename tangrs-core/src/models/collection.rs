use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::{Result, TangrsError};
use crate::models::{InputFormat, InternalId, SequenceRecord};
use crate::parser::extract_records;
use crate::sanitize::sanitize_sequence;
use crate::utils::read_lines;

///
/// SequenceCollection struct, every record parsed from one input source.
///
/// Names and sequences live in two maps keyed by [InternalId]. Both maps are
/// only ever filled together, so they always hold the same key set.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceCollection {
    pub(crate) format: InputFormat,
    pub(crate) names: BTreeMap<InternalId, String>,
    pub(crate) sequences: BTreeMap<InternalId, String>,
}

impl SequenceCollection {
    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn names(&self) -> &BTreeMap<InternalId, String> {
        &self.names
    }

    pub fn sequences(&self) -> &BTreeMap<InternalId, String> {
        &self.sequences
    }

    pub fn name(&self, id: InternalId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn sequence(&self, id: InternalId) -> Option<&str> {
        self.sequences.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = InternalId> + '_ {
        self.sequences.keys().copied()
    }

    ///
    /// Check that the name map and the sequence map share the identical key set.
    ///
    pub fn has_key_parity(&self) -> bool {
        self.names.keys().eq(self.sequences.keys())
    }

    ///
    /// Iterate over the records in ascending id order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = SequenceRecord<'_>> + '_ {
        self.names
            .iter()
            .zip(self.sequences.values())
            .map(|((id, name), sequence)| SequenceRecord {
                id: *id,
                name,
                sequence,
            })
    }
}

///
/// Accumulates records for one extraction call and hands out ids in discovery order.
///
pub(crate) struct CollectionBuilder {
    format: InputFormat,
    names: BTreeMap<InternalId, String>,
    sequences: BTreeMap<InternalId, String>,
}

impl CollectionBuilder {
    pub(crate) fn new(format: InputFormat) -> Self {
        CollectionBuilder {
            format,
            names: BTreeMap::new(),
            sequences: BTreeMap::new(),
        }
    }

    /// The id the next pushed record will receive.
    pub(crate) fn next_id(&self) -> InternalId {
        InternalId(self.sequences.len())
    }

    ///
    /// Sanitize `raw_sequence` and store it under the next id.
    ///
    pub(crate) fn push(&mut self, name: String, raw_sequence: &str) -> InternalId {
        let id = self.next_id();
        let sequence = sanitize_sequence(raw_sequence);

        if sequence.is_empty() {
            tracing::warn!(%id, name = %name, "record has no residues left after sanitization");
        } else {
            tracing::debug!(%id, name = %name, length = sequence.len(), "record extracted");
        }

        self.names.insert(id, name);
        self.sequences.insert(id, sequence);
        id
    }

    pub(crate) fn finish(self) -> SequenceCollection {
        let collection = SequenceCollection {
            format: self.format,
            names: self.names,
            sequences: self.sequences,
        };
        debug_assert!(collection.has_key_parity());
        collection
    }
}

impl TryFrom<&Path> for SequenceCollection {
    type Error = TangrsError;

    ///
    /// Create a new [SequenceCollection] from a sequence file.
    ///
    /// # Arguments:
    /// - value: path to a FASTA, space delimited, csv or raw sequence file on
    ///   disk (optionally gzip'd).
    fn try_from(value: &Path) -> Result<Self> {
        let lines = read_lines(value)?;
        let collection = extract_records(&lines)?;

        tracing::info!(
            path = %value.display(),
            format = %collection.format(),
            records = collection.len(),
            "parsed sequence collection"
        );

        Ok(collection)
    }
}

impl TryFrom<&str> for SequenceCollection {
    type Error = TangrsError;

    fn try_from(value: &str) -> Result<Self> {
        SequenceCollection::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for SequenceCollection {
    type Error = TangrsError;

    fn try_from(value: PathBuf) -> Result<Self> {
        SequenceCollection::try_from(value.as_path())
    }
}
