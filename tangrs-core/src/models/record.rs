use std::fmt::{self, Display};

use serde::Serialize;

///
/// Identifier assigned to a record in the order it was discovered, starting at 0.
///
/// Ids are never derived from input content, so two records with the same
/// name still get distinct ids.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct InternalId(pub usize);

impl Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for InternalId {
    fn from(value: usize) -> Self {
        InternalId(value)
    }
}

///
/// Borrowed view of one record of a [crate::models::SequenceCollection].
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceRecord<'a> {
    pub id: InternalId,
    pub name: &'a str,
    pub sequence: &'a str,
}

impl SequenceRecord<'_> {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    ///
    /// Render the record as a tab separated line: `id`, `name`, `sequence`.
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.id, self.name, self.sequence)
    }
}
