//! # Input/Output utilities for tangrs.
//!
//! Small helpers for writing the artifacts of a run to disk: the conditions
//! file (one predictor argument string per line), a table of the extracted
//! records, and a summary of what each predictor invocation did.
//!
pub mod conditions;
pub mod outcome;
pub mod records;

// re-expose core functions
pub use conditions::*;
pub use outcome::*;
pub use records::*;

/// Create the parent directory of `path` if there is one.
pub(crate) fn ensure_parent(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
