//! # tangrs-core
//!
//! Turn loosely formatted protein sequence files into argument strings for an
//! aggregation predictor.
//!
//! ## Main Components
//!
//! - **`sanitize`**: filters raw text down to the residue alphabet
//! - **`naming`**: derives short display names from free-text headers
//! - **`parser`**: detects the input layout (FASTA, `name sequence`, `name,sequence`
//!   or bare sequences) and extracts a [`SequenceCollection`]
//! - **`conditions`**: the registry of named experimental conditions
//! - **`runspec`**: combines a collection and a condition into one [`RunSpec`] per record
//!
//! Every record gets an [`InternalId`] in the order it is found. Ids, not
//! names, are what keep records apart: names are best effort and can repeat.
//!
//! ## Example
//!
//! ```rust
//! use tangrs_core::{ConditionRegistry, build_run_specs, extract_records};
//!
//! let lines = [">sp|P12345|TEST_HUMAN desc", "ACD EFG", "acd123efg"];
//! let collection = extract_records(&lines).unwrap();
//!
//! let registry = ConditionRegistry::builtin();
//! let specs = build_run_specs(&collection, &registry, "default").unwrap();
//!
//! assert_eq!(
//!     specs[0].command_arguments,
//!     "P12345 nt=\"N\" ct=\"N\" ph=\"7.4\" te=\"298\" io=\"0.1\" seq=\"ACDEFGacdefg\""
//! );
//! ```
//!
pub mod conditions;
pub mod errors;
pub mod models;
pub mod naming;
pub mod parser;
pub mod runspec;
pub mod sanitize;
pub mod utils;

// re-export things
pub use conditions::*;
pub use errors::*;
pub use models::*;
pub use naming::display_name;
pub use parser::*;
pub use runspec::*;
pub use sanitize::sanitize_sequence;
pub use utils::read_lines;

pub mod consts {
    /// Opens a new record in FASTA input.
    pub const RECORD_MARKER: char = '>';
}
