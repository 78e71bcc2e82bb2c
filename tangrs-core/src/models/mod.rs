pub mod collection;
pub mod format;
pub mod record;

// re-export for cleaner imports
pub use self::collection::SequenceCollection;
pub use self::format::InputFormat;
pub use self::record::{InternalId, SequenceRecord};
